mod nav_row;

pub use nav_row::NavRow;
