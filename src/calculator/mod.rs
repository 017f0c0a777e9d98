//! The calculator state machine, mirroring the page script.
//!
//! This is the reference model of the logic embedded in the served page:
//! one pending binary operation at a time, folded eagerly when the next
//! operator is chosen (left-to-right, no precedence). The state is four
//! scalars rather than an expression tree because nothing ever needs more
//! than the operand being typed, the captured operand, and the operator
//! between them.

mod keymap;

/// Display text shown after an invalid operation (division by zero).
pub const ERROR_DISPLAY: &str = "Error";

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The symbol the page sends for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Applies the operator. Division by zero is rejected before this is
    /// called, so `rhs` is never `0` for [`Operator::Div`].
    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

/// One discrete input event, whether it came from a button or a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKey {
    /// A digit `0..=9`.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// One of the four operators.
    Op(Operator),
    /// Evaluate the pending operation.
    Equals,
    /// Reset to the default state.
    Clear,
}

/// Per-session calculator state.
///
/// One instance per page load; sessions never share state. Every transition
/// ends with the new display text available from [`Calculator::display`].
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// The number being entered or displayed, as text. Default `"0"`.
    current: String,
    /// Operand captured when an operator was chosen.
    previous: Option<String>,
    /// The pending operator, if any. Set if and only if `previous` is set.
    operator: Option<Operator>,
    /// When set, the next digit starts a fresh number instead of appending.
    pending_reset: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            pending_reset: false,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Whether the display shows the error state.
    pub fn is_error(&self) -> bool {
        self.current == ERROR_DISPLAY
    }

    /// Feeds one input event through the state machine.
    pub fn press(&mut self, key: CalcKey) {
        // The error display behaves like cleared state: any new input
        // starts fresh instead of letting "Error" leak into an operand.
        if self.is_error() {
            self.clear();
        }

        match key {
            CalcKey::Digit(d) => {
                debug_assert!(d <= 9, "digit out of range: {d}");
                self.input_digit(char::from(b'0' + d));
            }
            CalcKey::Decimal => self.input_digit('.'),
            CalcKey::Op(op) => self.input_operator(op),
            CalcKey::Equals => self.evaluate(),
            CalcKey::Clear => self.clear(),
        }
    }

    /// Feeds a sequence of input events in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = CalcKey>) {
        for key in keys {
            self.press(key);
        }
    }

    fn input_digit(&mut self, d: char) {
        if self.pending_reset || self.current == "0" {
            self.current = if d == '.' { "0.".to_string() } else { d.to_string() };
            self.pending_reset = false;
        } else {
            if d == '.' && self.current.contains('.') {
                // A second decimal point is silently ignored.
                return;
            }
            self.current.push(d);
        }
    }

    fn input_operator(&mut self, op: Operator) {
        if self.operator.is_some() && !self.pending_reset {
            // Chained evaluation: fold the pending operation before
            // installing the new operator.
            self.evaluate();
            if self.is_error() {
                // The fold failed; stay in the cleared error state rather
                // than capturing "Error" as an operand.
                return;
            }
        }
        self.previous = Some(self.current.clone());
        self.operator = Some(op);
        self.pending_reset = true;
    }

    fn evaluate(&mut self) {
        // Equals without a pending operator is a no-op.
        let (Some(op), Some(prev)) = (self.operator, self.previous.as_deref()) else {
            return;
        };

        let lhs = parse_operand(prev);
        let rhs = parse_operand(&self.current);

        if op == Operator::Div && rhs == 0.0 {
            self.current = ERROR_DISPLAY.to_string();
        } else {
            self.current = format_number(op.apply(lhs, rhs));
        }
        self.operator = None;
        self.previous = None;
        self.pending_reset = true;
    }

    fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous = None;
        self.operator = None;
        self.pending_reset = false;
    }
}

/// Operands are numeric by construction (`"0."`, `"1.2"`, a rendered
/// result), so a parse failure is unreachable in practice.
fn parse_operand(text: &str) -> f64 {
    text.parse().unwrap_or(0.0)
}

/// Renders a result with `f64`'s `Display`: the shortest decimal form that
/// round-trips, with no trailing `.0` on whole numbers. This matches what
/// `Number.prototype.toString` produces in the page script for finite
/// values.
fn format_number(value: f64) -> String {
    value.to_string()
}
