pub mod suggest_products;
