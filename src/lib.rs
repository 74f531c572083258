// Tic-tac-toe with a depth-bounded alpha-beta engine
pub mod board;
pub mod search;
pub mod tutor;
pub mod selfplay;
pub mod protocol;
