//! Case resolution state machine for multi-letter replacements.
//!
//! A lowercase source letter always emits its replacement verbatim, and an
//! uppercase letter with a one-letter replacement always emits the uppercase
//! form. An uppercase letter with a multi-letter replacement is ambiguous
//! until the next letter arrives: Ш followed by a lowercase letter renders
//! as "Sh", inside an all-caps run as "SH".

/// Resolver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing pending.
    Idle,
    /// An uppercase multi-letter replacement waits for the next letter's
    /// case before it is emitted.
    Pending(&'static str),
}

/// Streaming case resolver.
pub struct CaseResolver {
    state: State,
    /// Case of the last letter emitted.
    prev_upper: bool,
    /// Output buffer.
    output: String,
}

impl CaseResolver {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            prev_upper: false,
            output: String::new(),
        }
    }

    /// Feeds one mapped letter.
    pub fn feed(&mut self, latin: &'static str, upper: bool) {
        self.resolve_pending(upper);
        if !upper {
            self.output.push_str(latin);
            self.prev_upper = false;
        } else if latin.len() == 1 {
            // one-letter replacement, no ambiguity
            self.push_upper(latin);
            self.prev_upper = true;
        } else {
            // prev_upper keeps the case of the letter before the pending
            // one; it decides the pending case at end of input or before a
            // non-letter break.
            self.state = State::Pending(latin);
        }
    }

    /// Feeds a hard/soft sign: no output, no case signal.
    pub fn feed_sign(&mut self) {}

    /// Feeds a character kept verbatim (digit, punctuation, Latin, ...).
    /// A pending replacement is resolved by the preceding letter's case,
    /// since no following letter will arrive before the break.
    pub fn feed_passthrough(&mut self, c: char) {
        let prev = self.prev_upper;
        self.resolve_pending(prev);
        self.output.push(c);
    }

    /// Resolves any pending replacement and returns the final output.
    pub fn finish(mut self) -> String {
        let prev = self.prev_upper;
        self.resolve_pending(prev);
        self.output
    }

    /// Emits a pending replacement, fully uppercased when the deciding
    /// context is uppercase, title-cased otherwise.
    fn resolve_pending(&mut self, next_upper: bool) {
        if let State::Pending(latin) = self.state {
            if next_upper {
                self.push_upper(latin);
            } else {
                self.push_title(latin);
            }
            self.state = State::Idle;
            self.prev_upper = next_upper;
        }
    }

    fn push_upper(&mut self, latin: &str) {
        for c in latin.chars() {
            self.output.push(c.to_ascii_uppercase());
        }
    }

    fn push_title(&mut self, latin: &str) {
        let mut chars = latin.chars();
        if let Some(first) = chars.next() {
            self.output.push(first.to_ascii_uppercase());
            self.output.extend(chars);
        }
    }
}

impl Default for CaseResolver {
    fn default() -> Self {
        Self::new()
    }
}
