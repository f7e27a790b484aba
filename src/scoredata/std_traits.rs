use super::{
    ExtensionTable, Extensions, ForwardTables, ScoreData, ScoreMatrix, ScoreMode, ScoreTable, TransitionTable,
    WindowLengths,
};
use crate::{
    math::{Mismatch, NearlyEqual, Tolerance},
    profile::Transition,
};
use std::fmt::{self, Display, Write};

impl Display for ScoreMode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScoreMode::Quantized => f.write_str("quantized"),
            ScoreMode::Float => f.write_str("float"),
        }
    }
}

/// Writes the row label `pos` right-aligned in a field of five.
#[inline]
fn write_label(f: &mut fmt::Formatter, pos: usize) -> fmt::Result {
    let mut buff = itoa::Buffer::new();
    write!(f, "{:>5}", buff.format(pos))
}

/// Writes `values` as one line with three decimal places.
fn write_floats(f: &mut fmt::Formatter, pos: usize, values: &[f32]) -> fmt::Result {
    write_label(f, pos)?;
    for v in values {
        write!(f, " {v:>8.3}")?;
    }
    f.write_char('\n')
}

impl Display for ScoreMatrix<u8> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        for pos in 0..self.rows() {
            write_label(f, pos)?;
            for &v in self.row(pos) {
                write!(f, " {:>3}", buff.format(v))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl Display for ScoreMatrix<f32> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for pos in 0..self.rows() {
            write_floats(f, pos, self.row(pos))?;
        }
        Ok(())
    }
}

impl Display for ExtensionTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (pos, row) in self.iter() {
            write_floats(f, pos, row)?;
        }
        Ok(())
    }
}

impl Display for ScoreData {
    /// Renders every populated table as text, one row per model position.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "# score data: M = {}, Kp = {}, mode = {}",
            self.m,
            self.alphabet.size(),
            self.mode()
        )?;

        writeln!(f, "# match scores")?;
        match &self.scores {
            ScoreTable::Quantized(table) => write!(f, "{table}")?,
            ScoreTable::Float(table) => write!(f, "{table}")?,
        }

        if let Some(Extensions { forward, reverse }) = &self.extensions {
            writeln!(f, "# forward extensions")?;
            write!(f, "{forward}")?;
            writeln!(f, "# reverse extensions")?;
            write!(f, "{reverse}")?;
        }

        if let Some(windows) = &self.windows {
            writeln!(f, "# prefix / suffix lengths")?;
            for (pos, (p, s)) in windows.prefix.iter().zip(&windows.suffix).enumerate() {
                write_floats(f, pos, &[*p, *s])?;
            }
        }

        if let Some(forward) = &self.forward {
            writeln!(f, "# forward emissions")?;
            write!(f, "{}", forward.emissions)?;
            for kind in Transition::ALL {
                writeln!(f, "# forward transitions {}", kind.label())?;
                write_floats(f, 0, forward.transitions.row(kind))?;
            }
        }

        Ok(())
    }
}

impl NearlyEqual<f32> for ScoreMatrix<f32> {
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        if self.cols() != other.cols() {
            return Err(None);
        }
        self.as_slice().compare(other.as_slice(), tol)
    }
}

impl NearlyEqual<f32> for ScoreTable {
    /// Byte tables must match exactly.
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        match (self, other) {
            (ScoreTable::Quantized(x), ScoreTable::Quantized(y)) if x == y => Ok(()),
            (ScoreTable::Float(x), ScoreTable::Float(y)) => x.compare(y, tol),
            _ => Err(None),
        }
    }
}

impl NearlyEqual<f32> for ExtensionTable {
    #[inline]
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        self.rows.compare(&other.rows, tol)
    }
}

impl NearlyEqual<f32> for Extensions {
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        self.forward.compare(&other.forward, tol)?;
        self.reverse.compare(&other.reverse, tol)
    }
}

impl NearlyEqual<f32> for WindowLengths {
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        self.prefix.compare(&other.prefix, tol)?;
        self.suffix.compare(&other.suffix, tol)
    }
}

impl NearlyEqual<f32> for TransitionTable {
    #[inline]
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        self.data.compare(&other.data, tol)
    }
}

impl NearlyEqual<f32> for ForwardTables {
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        self.emissions.compare(&other.emissions, tol)?;
        self.transitions.compare(&other.transitions, tol)
    }
}

impl NearlyEqual<f32> for ScoreData {
    fn compare(&self, other: &Self, tol: Tolerance<f32>) -> Result<(), Mismatch<f32>> {
        if self.m != other.m || self.alphabet != other.alphabet {
            return Err(None);
        }
        self.scores.compare(&other.scores, tol)?;
        self.extensions.compare(&other.extensions, tol)?;
        self.windows.compare(&other.windows, tol)?;
        self.forward.compare(&other.forward, tol)
    }
}
