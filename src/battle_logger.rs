use serde::Serialize;

/// Replay payload: the format id plus every protocol line, oldest
/// first. Matches the shape replay viewers ingest.
#[derive(Debug, Serialize)]
pub struct ReplayLog<'a> {
    pub formatid: &'a str,
    pub log: &'a [String],
}

/// Showdown-protocol battle log: pipe-joined lines, newest last. Move
/// lines are remembered so later steps can annotate them in place.
#[derive(Clone, Debug, Default)]
pub struct BattleLogger {
    formatid: String,
    log: Vec<String>,
    last_move_index: Option<usize>,
}

impl BattleLogger {
    pub fn new() -> Self {
        Self {
            formatid: "gen7customgame".to_string(),
            log: Vec::new(),
            last_move_index: None,
        }
    }

    pub fn new_with_format(formatid: impl Into<String>) -> Self {
        Self {
            formatid: formatid.into(),
            log: Vec::new(),
            last_move_index: None,
        }
    }

    pub fn add(&mut self, parts: &[&str]) {
        self.log.push(format!("|{}", parts.join("|")));
    }

    pub fn log_move(&mut self, source: &str, move_name: &str, target: &str) {
        self.log
            .push(format!("|move|{source}|{move_name}|{target}"));
        self.last_move_index = Some(self.log.len() - 1);
    }

    /// Appends an annotation such as `[still]`, `[miss]` or
    /// `[spread] ...` to the most recent move line.
    pub fn attr_last_move(&mut self, attr: &str) {
        if let Some(index) = self.last_move_index {
            let line = &mut self.log[index];
            line.push('|');
            line.push_str(attr);
        }
    }

    pub fn log_damage(&mut self, target: &str, hp: u32, max_hp: u32, tags: &[&str]) {
        let mut line = format!("|-damage|{target}|{}", hp_fragment(hp, max_hp));
        for tag in tags {
            line.push('|');
            line.push_str(tag);
        }
        self.log.push(line);
    }

    pub fn log_heal(&mut self, target: &str, hp: u32, max_hp: u32, tags: &[&str]) {
        let mut line = format!("|-heal|{target}|{}", hp_fragment(hp, max_hp));
        for tag in tags {
            line.push('|');
            line.push_str(tag);
        }
        self.log.push(line);
    }

    pub fn log_status(&mut self, target: &str, status: &str) {
        self.log.push(format!("|-status|{target}|{status}"));
    }

    pub fn log_cure_status(&mut self, target: &str, status: &str) {
        self.log.push(format!("|-curestatus|{target}|{status}"));
    }

    pub fn log_fail(&mut self, target: &str) {
        self.log.push(format!("|-fail|{target}"));
    }

    pub fn log_miss(&mut self, source: &str, target: &str) {
        self.log.push(format!("|-miss|{source}|{target}"));
    }

    pub fn log_immune(&mut self, target: &str) {
        self.log.push(format!("|-immune|{target}"));
    }

    pub fn log_boost(&mut self, target: &str, stat: &str, stages: u8, tags: &[&str]) {
        let mut line = format!("|-boost|{target}|{stat}|{stages}");
        for tag in tags {
            line.push('|');
            line.push_str(tag);
        }
        self.log.push(line);
    }

    pub fn log_unboost(&mut self, target: &str, stat: &str, stages: u8, tags: &[&str]) {
        let mut line = format!("|-unboost|{target}|{stat}|{stages}");
        for tag in tags {
            line.push('|');
            line.push_str(tag);
        }
        self.log.push(line);
    }

    pub fn log_hit_count(&mut self, target: &str, hits: u32) {
        self.log.push(format!("|-hitcount|{target}|{hits}"));
    }

    pub fn log_activate(&mut self, target: &str, effect: &str) {
        self.log.push(format!("|-activate|{target}|{effect}"));
    }

    pub fn log_anim(&mut self, source: &str, move_name: &str, target: &str) {
        self.log
            .push(format!("|-anim|{source}|{move_name}|{target}"));
    }

    pub fn log_zpower(&mut self, source: &str) {
        self.log.push(format!("|-zpower|{source}"));
    }

    pub fn log_mega(&mut self, source: &str, species: &str, item: &str) {
        self.log.push(format!("|-mega|{source}|{species}|{item}"));
    }

    pub fn log_burst(&mut self, source: &str, species: &str, item: &str) {
        self.log.push(format!("|-burst|{source}|{species}|{item}"));
    }

    pub fn log_cant(&mut self, source: &str, reason: &str, move_name: &str) {
        self.log
            .push(format!("|cant|{source}|{reason}|{move_name}"));
    }

    pub fn log_faint(&mut self, target: &str) {
        self.log.push(format!("|faint|{target}"));
    }

    pub fn log_ohko(&mut self) {
        self.log.push("|-ohko".to_string());
    }

    pub fn log_hint(&mut self, text: &str) {
        self.log.push(format!("|-hint|{text}"));
    }

    pub fn log_start(&mut self, target: &str, effect: &str) {
        self.log.push(format!("|-start|{target}|{effect}"));
    }

    pub fn log_end(&mut self, target: &str, effect: &str) {
        self.log.push(format!("|-end|{target}|{effect}"));
    }

    pub fn log_side_start(&mut self, side: &str, effect: &str) {
        self.log.push(format!("|-sidestart|{side}|{effect}"));
    }

    pub fn log_side_end(&mut self, side: &str, effect: &str) {
        self.log.push(format!("|-sideend|{side}|{effect}"));
    }

    pub fn log_weather(&mut self, weather: &str) {
        self.log.push(format!("|-weather|{weather}"));
    }

    pub fn log_field_start(&mut self, effect: &str) {
        self.log.push(format!("|-fieldstart|{effect}"));
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    pub fn replay(&self) -> ReplayLog<'_> {
        ReplayLog {
            formatid: &self.formatid,
            log: &self.log,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.replay()).unwrap_or_default()
    }
}

fn hp_fragment(hp: u32, max_hp: u32) -> String {
    if hp == 0 {
        "0 fnt".to_string()
    } else {
        format!("{hp}/{max_hp}")
    }
}

pub fn showdown_ident(side_idx: usize, slot: usize, name: &str) -> String {
    format!("{}: {name}", slot_token(side_idx, slot))
}

/// Bare position token, `p1a` style, as used by `[spread]` annotations.
pub fn slot_token(side_idx: usize, slot: usize) -> String {
    let side = if side_idx == 0 { "p1" } else { "p2" };
    let slot = (b'a' + slot as u8) as char;
    format!("{side}{slot}")
}

pub fn side_label(side_idx: usize) -> &'static str {
    if side_idx == 0 {
        "p1"
    } else {
        "p2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_annotations_land_on_the_move_line() {
        let mut logger = BattleLogger::new();
        logger.log_move("p1a: Pikachu", "Thunderbolt", "p2a: Gyarados");
        logger.log_fail("p1a: Pikachu");
        logger.attr_last_move("[still]");
        assert_eq!(
            logger.log_lines(),
            &[
                "|move|p1a: Pikachu|Thunderbolt|p2a: Gyarados|[still]".to_string(),
                "|-fail|p1a: Pikachu".to_string(),
            ]
        );
    }

    #[test]
    fn idents_cover_both_sides_and_slots() {
        assert_eq!(showdown_ident(0, 0, "Pikachu"), "p1a: Pikachu");
        assert_eq!(showdown_ident(1, 1, "Gyarados"), "p2b: Gyarados");
        assert_eq!(slot_token(1, 0), "p2a");
        assert_eq!(side_label(1), "p2");
    }

    #[test]
    fn zero_hp_renders_as_fainted() {
        let mut logger = BattleLogger::new();
        logger.log_damage("p2a: Golem", 0, 160, &["[from] recoil"]);
        assert_eq!(logger.log_lines(), &["|-damage|p2a: Golem|0 fnt|[from] recoil"]);
    }

    #[test]
    fn json_export_keeps_every_line() {
        let mut logger = BattleLogger::new_with_format("gen7doublescustomgame");
        logger.log_move("p1a: Lapras", "Surf", "p2a: Golem");
        logger.log_damage("p2a: Golem", 40, 160, &[]);
        let value = logger.to_json();
        assert_eq!(value["formatid"], "gen7doublescustomgame");
        assert_eq!(value["log"].as_array().map(Vec::len), Some(2));
    }
}
