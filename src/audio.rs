//! Sound cues
//!
//! Which events make a sound is decided here for every platform. The actual
//! synthesis uses the Web Audio API and only exists on wasm32; sounds are
//! generated procedurally, no external files needed.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Rocket burning (sustained while thrust is held)
    Thrust,
    /// Touched down on a pad
    Landed,
    /// Crash / explosion
    Crash,
    /// Gem picked up
    Collect,
}

impl SoundEffect {
    /// One-shot sound for a frame event. Thrust is handled as a held tone
    /// instead, so it maps to nothing here.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Landed { .. } => Some(SoundEffect::Landed),
            GameEvent::Crashed => Some(SoundEffect::Crash),
            GameEvent::Collected => Some(SoundEffect::Collect),
            GameEvent::Thrust | GameEvent::Respawned | GameEvent::SessionEnded(_) => None,
        }
    }
}

/// True when any event this frame burned fuel
pub fn thrust_active(events: &[GameEvent]) -> bool {
    events.iter().any(|e| matches!(e, GameEvent::Thrust))
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        /// Running rocket rumble, if any
        thrust: Option<(OscillatorNode, GainNode)>,
    }

    impl AudioManager {
        pub fn new(volume: f32) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: volume.clamp(0.0, 1.0),
                thrust: None,
            }
        }

        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        fn context(&self) -> Option<&AudioContext> {
            let ctx = self.ctx.as_ref()?;
            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            Some(ctx)
        }

        /// Play a one-shot sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = self.context() else { return };

            match effect {
                SoundEffect::Landed => self.play_landed(ctx, vol),
                SoundEffect::Crash => self.play_crash(ctx, vol),
                SoundEffect::Collect => self.play_collect(ctx, vol),
                SoundEffect::Thrust => self.play_thrust_puff(ctx, vol),
            }
        }

        /// Start or stop the rocket rumble; call every frame
        pub fn set_thrust(&mut self, active: bool) {
            match (active, self.thrust.is_some()) {
                (true, false) => {
                    if self.volume <= 0.0 {
                        return;
                    }
                    let Some(ctx) = self.context() else { return };
                    let Some((osc, gain)) = create_osc(ctx, 55.0, OscillatorType::Sawtooth)
                    else {
                        return;
                    };
                    gain.gain().set_value(self.volume * 0.15);
                    osc.start().ok();
                    self.thrust = Some((osc, gain));
                }
                (false, true) => {
                    if let Some((osc, _gain)) = self.thrust.take() {
                        osc.stop().ok();
                    }
                }
                _ => {}
            }
        }

        // === Sound generators ===

        /// Touchdown - rising two-note chime
        fn play_landed(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            for (i, freq) in [523.0, 784.0].into_iter().enumerate() {
                let Some((osc, gain)) = create_osc(ctx, freq, OscillatorType::Triangle) else {
                    return;
                };
                let start = t + i as f64 * 0.12;
                gain.gain().set_value_at_time(0.0, t).ok();
                gain.gain().set_value_at_time(vol * 0.4, start).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, start + 0.3)
                    .ok();
                osc.start_with_when(start).ok();
                osc.stop_with_when(start + 0.35).ok();
            }
        }

        /// Crash - low noisy boom
        fn play_crash(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();

            if let Some((osc, gain)) = create_osc(ctx, 120.0, OscillatorType::Sawtooth) {
                gain.gain().set_value_at_time(vol * 0.5, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.6)
                    .ok();
                osc.frequency().set_value_at_time(120.0, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(30.0, t + 0.6)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.65).ok();
            }

            // Crackle on top
            if let Some((osc, gain)) = create_osc(ctx, 900.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.12, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                    .ok();
                osc.frequency().set_value_at_time(900.0, t).ok();
                osc.frequency().set_value_at_time(300.0, t + 0.03).ok();
                osc.frequency().set_value_at_time(1200.0, t + 0.06).ok();
                osc.frequency().set_value_at_time(200.0, t + 0.1).ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.25).ok();
            }
        }

        /// Gem pickup - quick bright blip
        fn play_collect(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = create_osc(ctx, 880.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                .ok();
            osc.frequency().set_value_at_time(880.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(1760.0, t + 0.08)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.15).ok();
        }

        /// Single thrust burst, for a jump
        fn play_thrust_puff(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = create_osc(ctx, 80.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(vol * 0.2, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.12).ok();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
