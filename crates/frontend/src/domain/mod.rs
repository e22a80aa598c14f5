pub mod a025_order;
