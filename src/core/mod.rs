pub mod engine;
pub mod game;
pub mod menu; // Variant picker shown before the first game
