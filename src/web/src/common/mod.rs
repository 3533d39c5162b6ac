pub mod default_handler;
