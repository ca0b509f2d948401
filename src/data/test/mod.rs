mod customer;
mod customer_address;
mod email_registration;
mod plan;
mod store;
mod tray_config;
mod user_link;
