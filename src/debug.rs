/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance
 * metrics and other debug information to be displayed in the UI.
 */

use std::time::Duration;

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub edge_count: usize,
    pub line_slots: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            edge_count: 0,
            line_slots: 0,
        }
    }
}
