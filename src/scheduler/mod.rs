pub mod customer_sync;
