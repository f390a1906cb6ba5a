pub mod adsorption;
pub mod amplicon;
pub mod constants;
pub mod droplet;
pub mod droplet_data;
pub mod error;
pub mod kinetics;
pub mod math_utils;
pub mod sim;
