//! Client-side data layer for the voting app: the HTTP gateway with its
//! local fallbacks, the in-memory app state and its transitions, and the
//! periodic refresh loop.

pub mod controller;
pub mod gateway;
pub mod seed;
pub mod session;
