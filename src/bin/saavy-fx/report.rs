use serde::Serialize;

use saavy_fx::{
    contour::{plan_contour, KeyPoint, ScheduleInstruction},
    engine::{InstrumentKind, PlayReport},
    patch::Source,
    EffectSettings, FxConfig, FxPlayer,
};

/// Snapshot of the effect chain right after the sound starts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSnapshot {
    pub volume_db: f64,
    pub tremolo_wet: f64,
    pub vibrato_wet: f64,
    pub lowpass_start: f64,
    pub lowpass_end: f64,
    pub highpass_start: f64,
    pub highpass_end: f64,
    pub crusher_wet: f64,
    pub crusher_bits: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub source: String,
    pub instrument: String,
    pub start: f64,
    pub duration: f64,
    pub period: Option<f64>,
    pub chain: ChainSnapshot,
    pub key_points: Vec<KeyPoint>,
    pub instructions: Vec<ScheduleInstruction>,
}

impl Report {
    pub fn new(
        settings: &EffectSettings,
        config: &FxConfig,
        player: &FxPlayer,
        played: PlayReport,
        instructions: Vec<ScheduleInstruction>,
        start: f64,
    ) -> Self {
        let end = start + played.duration;
        let chain = player.chain();

        let snapshot = ChainSnapshot {
            volume_db: chain.master.volume.value_at(start + config.volume_ramp_time),
            tremolo_wet: chain.tremolo.wet.value_at(start),
            vibrato_wet: chain.vibrato.wet.value_at(start),
            lowpass_start: chain.lowpass.frequency.value_at(start),
            lowpass_end: chain.lowpass.frequency.value_at(end),
            highpass_start: chain.highpass.frequency.value_at(start),
            highpass_end: chain.highpass.frequency.value_at(end),
            crusher_wet: chain.crusher.wet.value_at(start),
            crusher_bits: chain.crusher.bits,
        };

        let key_points = match settings.source {
            Source::Oscillator(_) => plan_contour(&settings.contour_params()).points().to_vec(),
            Source::Noise(_) => Vec::new(),
        };

        let instrument = match played.instrument {
            InstrumentKind::Synth => format!("synth #{}", played.index),
            InstrumentKind::Noise => format!("noise #{}", played.index),
        };

        Self {
            source: settings.source.to_string(),
            instrument,
            start,
            duration: played.duration,
            period: played.period,
            chain: snapshot,
            key_points,
            instructions,
        }
    }

    pub fn print_table(&self) {
        println!("=== saavy-fx ===");
        println!("Source:     {} on {}", self.source, self.instrument);
        println!("Start:      {:.3}s", self.start);
        println!("Duration:   {:.3}s", self.duration);
        if let Some(period) = self.period {
            println!("Period:     {:.4}s", period);
        }
        println!();

        let c = &self.chain;
        println!("Volume:     {:.1} dB", c.volume_db);
        println!("Tremolo:    {}", on_off(c.tremolo_wet));
        println!("Vibrato:    {}", on_off(c.vibrato_wet));
        println!("Lowpass:    {:.0} Hz -> {:.0} Hz", c.lowpass_start, c.lowpass_end);
        println!("Highpass:   {:.0} Hz -> {:.0} Hz", c.highpass_start, c.highpass_end);
        println!("Crusher:    {} ({} bits)", on_off(c.crusher_wet), c.crusher_bits);

        if self.key_points.is_empty() {
            return;
        }

        println!();
        println!("Key points (relative time, Hz):");
        for point in &self.key_points {
            println!("  {:>6.3}  {:>10.3}", point.time, point.frequency);
        }

        println!();
        println!("Frequency instructions ({}):", self.instructions.len());
        for instruction in &self.instructions {
            println!(
                "  {:>9.4}s  {:<5}  {:>10.3} Hz",
                instruction.time,
                format!("{:?}", instruction.kind).to_lowercase(),
                instruction.value
            );
        }
    }
}

fn on_off(wet: f64) -> &'static str {
    if wet > 0.0 {
        "on"
    } else {
        "off"
    }
}
