pub mod demo;
pub mod monitor;
pub mod net;
pub mod sim;
pub mod tb;

#[cfg(test)]
mod test;
