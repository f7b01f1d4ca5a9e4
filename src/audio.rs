//! Audio feedback
//!
//! Simulation events map to short procedural tones; on wasm they are played
//! through the Web Audio API - no external files needed!

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Ball dropped off the course
    Fall,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A fire-and-forget tone request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Start frequency (Hz)
    pub frequency: f32,
    /// Length (s)
    pub duration: f32,
    pub waveform: Waveform,
    /// Peak gain (0.0 - 1.0)
    pub volume: f32,
    /// Frequency at the end of the tone, for chirps and drops
    pub end_frequency: Option<f32>,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::Fell { .. } => Some(SoundEffect::Fall),
        }
    }

    /// Tone parameters for this effect
    pub fn tone(&self) -> Tone {
        match self {
            // Short upward chirp
            SoundEffect::Jump => Tone {
                frequency: 420.0,
                duration: 0.12,
                waveform: Waveform::Square,
                volume: 0.08,
                end_frequency: Some(640.0),
            },
            // Bright ping
            SoundEffect::Coin => Tone {
                frequency: 880.0,
                duration: 0.15,
                waveform: Waveform::Triangle,
                volume: 0.12,
                end_frequency: Some(1320.0),
            },
            // Falling whistle
            SoundEffect::Fall => Tone {
                frequency: 320.0,
                duration: 0.45,
                waveform: Waveform::Sawtooth,
                volume: 0.1,
                end_frequency: Some(80.0),
            },
        }
    }
}

/// Tone requests for a batch of events; empty when muted
pub fn tones_for(events: &[GameEvent], muted: bool) -> Vec<Tone> {
    if muted {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(SoundEffect::for_event)
        .map(|effect| effect.tone())
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Tone, Waveform};

    impl From<Waveform> for OscillatorType {
        fn from(waveform: Waveform) -> Self {
            match waveform {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Triangle => OscillatorType::Triangle,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
            }
        }
    }

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.8,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Play a tone
        pub fn play(&self, tone: &Tone) {
            let vol = tone.volume * self.master_volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let Some((osc, gain)) = Self::create_osc(ctx, tone) else {
                return;
            };
            let t = ctx.current_time();
            let end = t + tone.duration as f64;

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.001, end).ok();
            if let Some(end_freq) = tone.end_frequency {
                osc.frequency().set_value_at_time(tone.frequency, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(end_freq, end)
                    .ok();
            }

            osc.start().ok();
            osc.stop_with_when(end + 0.02).ok();
        }

        /// Create an oscillator with gain envelope
        fn create_osc(ctx: &AudioContext, tone: &Tone) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(tone.waveform.into());
            osc.frequency().set_value(tone.frequency);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }
}
