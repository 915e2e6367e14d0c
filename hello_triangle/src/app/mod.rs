pub mod hello_triangle;
