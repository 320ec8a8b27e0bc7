use crate::{
    contour::{period_for, plan_contour, schedule, ScheduleInstruction},
    dsp::oscillator::OscillatorType,
    engine::config::FxConfig,
    graph::{
        chain::FxChain,
        param::{ParamControl, ParamTimeline, RampCurve},
    },
    patch::{EffectSettings, Source},
    synth::{InstrumentPool, NoiseSynth, Synth},
};

/*
Playing a Sound Effect
======================

`play` turns one `EffectSettings` into control instructions, all stamped
relative to `now`:

  1. Effect chain: master volume, tremolo, vibrato, filters, crusher.
  2. Instrument: the next pitched synth or noise source from its pool, with
     its waveform/colour and envelope set, triggered for the hold time.
  3. Pitched sources only: the frequency contour is planned and scheduled
     across the whole sound, including release.

    trigger                  hold                       end
    │◄── attack ─►◄─ decay ─►◄── duration ──►│◄─ release ─►│
    now                                      now + hold    now + total

Reusing an instrument
---------------------

Pools are round-robin, so a fast burst of sounds eventually lands on an
instrument whose previous contour is still scheduled. Its frequency
automation is cancelled from `now` before the new contour is written, so the
two schedules never interleave.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Synth,
    Noise,
}

/// What a call to `play` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayReport {
    pub instrument: InstrumentKind,
    /// Index of the instrument within its pool.
    pub index: usize,
    /// Time from trigger to end of release.
    pub duration: f64,
    /// Contour period, for pitched sources.
    pub period: Option<f64>,
    /// Frequency instructions scheduled.
    pub instructions: usize,
}

/// Owns the effect chain and instrument pools, and plays sounds onto them.
pub struct FxPlayer {
    config: FxConfig,
    chain: FxChain,
    synths: InstrumentPool<Synth>,
    noises: InstrumentPool<NoiseSynth>,
}

impl FxPlayer {
    pub fn new(config: FxConfig) -> Self {
        let chain = FxChain::new(config.lowpass_default);
        let synths = InstrumentPool::new(config.synth_voices, Synth::new);
        let noises = InstrumentPool::new(config.noise_voices, NoiseSynth::new);

        Self {
            config,
            chain,
            synths,
            noises,
        }
    }

    /// Schedule one sound effect starting at `now`.
    pub fn play(&mut self, settings: &EffectSettings, now: f64) -> PlayReport {
        self.play_inner(settings, now, None)
    }

    /// Like [`play`](Self::play), and also appends every frequency instruction
    /// written to the synth onto `record`. Noise sources record nothing.
    pub fn play_recorded(
        &mut self,
        settings: &EffectSettings,
        now: f64,
        record: &mut Vec<ScheduleInstruction>,
    ) -> PlayReport {
        self.play_inner(settings, now, Some(record))
    }

    fn play_inner(
        &mut self,
        settings: &EffectSettings,
        now: f64,
        record: Option<&mut Vec<ScheduleInstruction>>,
    ) -> PlayReport {
        let hold = settings.hold_time();
        let duration = settings.total_duration();

        self.configure_chain(settings, duration, now);

        let report = match settings.source {
            Source::Noise(color) => {
                let (index, noise) = self.noises.next_mut();
                noise.noise = color;
                noise.envelope.set_adsr(
                    settings.attack,
                    settings.decay,
                    settings.sustain,
                    settings.release,
                );
                noise.trigger_attack_release(now, hold);

                PlayReport {
                    instrument: InstrumentKind::Noise,
                    index,
                    duration,
                    period: None,
                    instructions: 0,
                }
            }
            Source::Oscillator(waveform) => {
                let (index, synth) = self.synths.next_mut();
                synth.oscillator = OscillatorType::new(waveform).with_partials(settings.harmonics);
                synth.envelope.set_adsr(
                    settings.attack,
                    settings.decay,
                    settings.sustain,
                    settings.release,
                );
                synth.trigger_attack_release(now, hold);

                synth.frequency.cancel_scheduled_values(now);
                let contour = plan_contour(&settings.contour_params());
                let period = period_for(settings.repeat, duration, self.config.max_repeat);
                let instructions = match record {
                    Some(record) => {
                        let mut tee = Recorded {
                            timeline: &mut synth.frequency,
                            record,
                        };
                        schedule(&mut tee, &contour, period, duration, now)
                    }
                    None => schedule(&mut synth.frequency, &contour, period, duration, now),
                };

                PlayReport {
                    instrument: InstrumentKind::Synth,
                    index,
                    duration,
                    period: Some(period),
                    instructions,
                }
            }
        };

        log::debug!(
            "play {} on {:?} #{} at {:.3}s: {:.3}s, {} frequency instructions",
            settings.source,
            report.instrument,
            report.index,
            now,
            duration,
            report.instructions
        );

        report
    }

    fn configure_chain(&mut self, settings: &EffectSettings, duration: f64, now: f64) {
        let chain = &mut self.chain;

        let volume = &mut chain.master.volume;
        if volume.value_at(now) != settings.volume {
            volume.ramp_to(settings.volume, self.config.volume_ramp_time, now, RampCurve::Linear);
        }

        let tremolo_on = settings.tremolo != 0.0;
        chain.tremolo.wet.set_value(switch(tremolo_on), now);
        if tremolo_on {
            chain.tremolo.depth.set_value(settings.tremolo, now);
            chain.tremolo.frequency.set_value(settings.tremolo_freq, now);
        }

        let vibrato_on = settings.vibrato != 0.0;
        chain.vibrato.wet.set_value(switch(vibrato_on), now);
        if vibrato_on {
            chain.vibrato.depth.set_value(settings.vibrato, now);
            chain.vibrato.frequency.set_value(settings.vibrato_freq, now);
        }

        let min_frequency = self.config.min_filter_frequency;
        let lowpass = if settings.lowpass != 0.0 {
            settings.lowpass
        } else {
            self.config.lowpass_default
        };
        sweep_filter(
            &mut chain.lowpass.frequency,
            lowpass,
            settings.lowpass,
            settings.lowpass_sweep,
            duration,
            now,
            min_frequency,
        );
        sweep_filter(
            &mut chain.highpass.frequency,
            settings.highpass,
            settings.highpass,
            settings.highpass_sweep,
            duration,
            now,
            min_frequency,
        );

        let crush = settings.bitcrush > 0;
        chain.crusher.wet.set_value(switch(crush), now);
        chain.crusher.bits = if crush { settings.bitcrush } else { 8 };
    }

    /// Cut every sound short at `now` and drop everything scheduled after it.
    pub fn cancel_all(&mut self, now: f64) {
        for synth in self.synths.iter_mut() {
            synth.cancel(now);
        }
        for noise in self.noises.iter_mut() {
            noise.cancel(now);
        }
        log::debug!("cancelled all sounds at {:.3}s", now);
    }

    /// Drop automation that can no longer affect values at or after `time`.
    pub fn forget_before(&mut self, time: f64) {
        self.chain.forget_before(time);
        for synth in self.synths.iter_mut() {
            synth.forget_before(time);
        }
        for noise in self.noises.iter_mut() {
            noise.forget_before(time);
        }
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn chain(&self) -> &FxChain {
        &self.chain
    }

    pub fn synths(&self) -> &InstrumentPool<Synth> {
        &self.synths
    }

    pub fn noises(&self) -> &InstrumentPool<NoiseSynth> {
        &self.noises
    }

    /// Whether any instrument is sounding at `time`.
    pub fn is_active_at(&self, time: f64) -> bool {
        self.synths.iter().any(|s| s.is_active_at(time))
            || self.noises.iter().any(|n| n.is_active_at(time))
    }
}

impl Default for FxPlayer {
    fn default() -> Self {
        Self::new(FxConfig::default())
    }
}

/// Writes to a timeline and keeps a copy of each instruction.
struct Recorded<'a> {
    timeline: &'a mut ParamTimeline,
    record: &'a mut Vec<ScheduleInstruction>,
}

impl ParamControl for Recorded<'_> {
    fn set_value_at_time(&mut self, value: f64, time: f64) {
        self.timeline.set_value_at_time(value, time);
        self.record.set_value_at_time(value, time);
    }

    fn exponential_ramp_to_value_at_time(&mut self, value: f64, time: f64) {
        self.timeline.exponential_ramp_to_value_at_time(value, time);
        self.record.exponential_ramp_to_value_at_time(value, time);
    }

    fn linear_ramp_to_value_at_time(&mut self, value: f64, time: f64) {
        self.timeline.linear_ramp_to_value_at_time(value, time);
        self.record.linear_ramp_to_value_at_time(value, time);
    }

    fn cancel_scheduled_values(&mut self, time: f64) {
        self.timeline.cancel_scheduled_values(time);
        self.record.cancel_scheduled_values(time);
    }
}

#[inline]
fn switch(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Set a filter cutoff, and sweep it over the sound when both the cutoff and
/// the sweep amount were given.
fn sweep_filter(
    param: &mut ParamTimeline,
    cutoff: f64,
    requested: f64,
    sweep: f64,
    duration: f64,
    now: f64,
    min_frequency: f64,
) {
    param.set_value(cutoff, now);
    if requested != 0.0 && sweep != 0.0 {
        let target = (requested + sweep).max(min_frequency);
        param.ramp_to(target, duration, now, RampCurve::Exponential);
    }
}
