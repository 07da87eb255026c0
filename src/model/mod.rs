pub mod sponsorship;
