#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Exits(String),
}

/// Buffered response lines for one turn. Handlers append blocks; the
/// session loop (or a test) renders them at the end of the turn.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // ensure only one Exits block exists, always last
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    /// Absorb another turn's blocks, e.g. the implicit look after a move.
    pub fn append(&mut self, mut other: Output) {
        self.blocks.append(&mut other.blocks);
    }

    /// Render the blocks into display lines, titles carrying the `> ` marker.
    pub fn lines(&self) -> Vec<String> {
        self.blocks
            .iter()
            .map(|block| match block {
                OutputBlock::Title(t) => format!("> {t}"),
                OutputBlock::Text(s) | OutputBlock::Exits(s) => s.clone(),
            })
            .collect()
    }
}
