pub mod detalizers;
