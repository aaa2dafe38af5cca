//! Memory-mapped I/O for the simulator.
//!
//! [`MappedIo`] decorates any [`MemoryBus`] and intercepts three kinds of access:
//!
//! | Address         | Access | Behaviour                                      |
//! |-----------------|--------|------------------------------------------------|
//! | `0xFE`          | read   | fresh pseudo-random byte                       |
//! | `0xFF`          | read   | last key code reported by the host             |
//! | `0x0200-0x05FF` | write  | stored, then forwarded to the host as a pixel  |
//!
//! Every other access passes straight through to the wrapped bus.
//!
//! # Example
//!
//! ```rust
//! use snake6502::{Framebuffer, FlatMemory, MappedIo, MemoryBus};
//!
//! let mut bus = MappedIo::with_seed(FlatMemory::new(), Framebuffer::new(), 7);
//!
//! // Top-left pixel of the second row, colour 0x11 % 16 = 1
//! bus.write(0x0220, 0x11);
//! assert_eq!(bus.host().pixel(0, 1), 1);
//! assert_eq!(bus.inner().read(0x0220), 0x11);
//! ```

use std::cell::RefCell;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::MemoryBus;

/// Reading this address yields a random byte.
pub const RANDOM_ADDR: u16 = 0x00FE;

/// Reading this address yields the last key pressed.
pub const KEY_ADDR: u16 = 0x00FF;

/// First byte of screen memory.
pub const SCREEN_START: u16 = 0x0200;

/// Last byte of screen memory.
pub const SCREEN_END: u16 = 0x05FF;

/// Screen width and height in pixels.
pub const SCREEN_WIDTH: usize = 32;

/// Number of distinct colour indices a pixel can take.
pub const PALETTE_SIZE: u8 = 16;

/// Host side of the I/O contract: something that shows pixels and reports keys.
///
/// Both calls are made synchronously from inside instruction execution and must
/// return promptly.
pub trait IoHost {
    /// A screen byte was written; `color` is already reduced to `0..16`.
    fn update(&mut self, x: u8, y: u8, color: u8);

    /// Key code of the most recent key press.
    fn last_keypress(&self) -> u8;
}

/// Maps a screen-memory address to `(column, row)`.
///
/// Returns `None` outside `SCREEN_START..=SCREEN_END`.
pub fn screen_coordinates(addr: u16) -> Option<(u8, u8)> {
    if !(SCREEN_START..=SCREEN_END).contains(&addr) {
        return None;
    }
    let width = SCREEN_WIDTH as u16;
    let x = addr % width;
    let y = (addr - SCREEN_START) / width;
    Some((x as u8, y as u8))
}

/// Decorator adding memory-mapped I/O on top of a base bus.
pub struct MappedIo<B: MemoryBus, H: IoHost> {
    inner: B,
    host: H,
    /// Reads are `&self`, so the generator needs interior mutability.
    rng: RefCell<StdRng>,
}

impl<B: MemoryBus, H: IoHost> MappedIo<B, H> {
    /// Wraps `inner`, seeding the random port from OS entropy.
    pub fn new(inner: B, host: H) -> Self {
        Self::with_rng(inner, host, StdRng::from_entropy())
    }

    /// Wraps `inner` with a deterministic random port.
    pub fn with_seed(inner: B, host: H, seed: u64) -> Self {
        Self::with_rng(inner, host, StdRng::seed_from_u64(seed))
    }

    fn with_rng(inner: B, host: H, rng: StdRng) -> Self {
        Self {
            inner,
            host,
            rng: RefCell::new(rng),
        }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<B: MemoryBus, H: IoHost> MemoryBus for MappedIo<B, H> {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            RANDOM_ADDR => self.rng.borrow_mut().gen(),
            KEY_ADDR => self.host.last_keypress(),
            _ => self.inner.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.inner.write(addr, value);
        if let Some((x, y)) = screen_coordinates(addr) {
            let color = value % PALETTE_SIZE;
            debug!("pixel ({}, {}) <- {}", x, y, color);
            self.host.update(x, y, color);
        }
    }
}

/// Headless [`IoHost`]: a 32×32 grid of colour indices and a key latch.
///
/// Front ends can render from [`Framebuffer::pixels`] and feed input through
/// [`Framebuffer::press_key`]; tests use it to observe what a program drew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [[u8; SCREEN_WIDTH]; SCREEN_WIDTH],
    last_key: u8,
    updates: u64,
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: [[0; SCREEN_WIDTH]; SCREEN_WIDTH],
            last_key: 0,
            updates: 0,
        }
    }

    /// Colour index at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 32 or more.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y][x]
    }

    /// Rows of colour indices, top to bottom.
    pub fn pixels(&self) -> &[[u8; SCREEN_WIDTH]; SCREEN_WIDTH] {
        &self.pixels
    }

    /// Latches `key` for the next read of [`KEY_ADDR`].
    pub fn press_key(&mut self, key: u8) {
        self.last_key = key;
    }

    /// Number of pixel writes received so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl IoHost for Framebuffer {
    fn update(&mut self, x: u8, y: u8, color: u8) {
        self.pixels[y as usize][x as usize] = color;
        self.updates += 1;
    }

    fn last_keypress(&self) -> u8 {
        self.last_key
    }
}
