#![no_std]

pub mod joystick;
pub mod neopixel;
pub mod time;
