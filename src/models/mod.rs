pub mod city;
pub mod selector;
pub mod stats;
pub mod table;
pub mod trip;
