pub mod amt_client;
