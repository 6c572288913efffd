// Domain layer - Panel records and the rules that normalize raw rows into them
pub mod cell;
pub mod coerce;
pub mod panel;
