pub mod http;
pub mod web3forms;
