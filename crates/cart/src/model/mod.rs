pub mod cart;
pub mod cart_item;
pub mod product;
