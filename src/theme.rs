/*
 * Theme Module
 *
 * Color palettes for particles, connection lines and the glow halo.
 * Selectable at runtime from the controls window.
 */

use nannou::prelude::*;

#[derive(Clone)]
pub struct Theme {
    pub name: &'static str,
    pub particle: Rgb<u8>,
    pub line: Rgb<u8>,
    pub glow: Rgb<u8>,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "Classic",
            particle: rgb(50, 205, 50),
            line: rgb(255, 255, 240),
            glow: rgb(147, 112, 219),
        }
    }

    pub fn amethyst() -> Self {
        Self {
            name: "Amethyst",
            particle: rgb(255, 193, 7),
            line: rgb(149, 117, 205),
            glow: rgb(255, 193, 7),
        }
    }

    pub fn meadow() -> Self {
        Self {
            name: "Meadow",
            particle: rgb(50, 205, 50),
            line: rgb(255, 215, 0),
            glow: rgb(255, 215, 0),
        }
    }

    pub fn neon() -> Self {
        Self {
            name: "Neon",
            particle: rgb(138, 43, 226),
            line: rgb(0, 255, 255),
            glow: rgb(0, 255, 255),
        }
    }

    pub fn ember() -> Self {
        Self {
            name: "Ember",
            particle: rgb(255, 165, 0),
            line: rgb(255, 201, 102),
            glow: rgb(255, 201, 102),
        }
    }

    pub fn all() -> [Theme; 5] {
        [
            Theme::classic(),
            Theme::amethyst(),
            Theme::meadow(),
            Theme::neon(),
            Theme::ember(),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}
