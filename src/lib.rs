use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

const INIT_DIAL_POSITION: usize = 50;
const DIAL_POSITION_COUNT: usize = 100;
const PASSWORD_POSITION: usize = 0;

#[derive(Debug)]
pub enum Error {
    TooShortInstruction(String),
    InvalidDirectionChar(char),
    InvalidStepsText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TooShortInstruction(s) => write!(
                f,
                "Too short instruction text({}), expect a direction character followed by steps.",
                s
            ),
            Error::InvalidDirectionChar(c) => {
                write!(f, "Unknown direction character({}) in instruction.", c)
            }
            Error::InvalidStepsText(s) => write!(
                f,
                "Invalid steps text({}) in instruction, expect a base-10 integer.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn unit(&self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    direction: Direction,
    steps: isize,
}

impl TryFrom<&str> for Instruction {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let text = value.trim();
        if text.len() < 2 {
            return Err(Error::TooShortInstruction(text.to_string()));
        }

        let dir_char = text.chars().next().unwrap();
        let direction = match dir_char.to_ascii_lowercase() {
            'l' => Direction::Left,
            'r' => Direction::Right,
            _ => return Err(Error::InvalidDirectionChar(dir_char)),
        };
        let steps_text = &text[dir_char.len_utf8()..];
        let steps = steps_text
            .parse::<isize>()
            .map_err(|_| Error::InvalidStepsText(steps_text.to_string()))?;

        Ok(Self { direction, steps })
    }
}

#[derive(Debug)]
pub struct Dial {
    position: usize,
}

impl Dial {
    pub fn new(position: usize) -> Self {
        Self {
            position: position % DIAL_POSITION_COUNT,
        }
    }

    pub fn rotate(&mut self, inst: &Instruction) {
        let count = isize::try_from(DIAL_POSITION_COUNT).unwrap();
        let mut pos =
            (isize::try_from(self.position).unwrap() + inst.direction.unit() * inst.steps) % count;
        if pos < 0 {
            pos += count;
        }

        self.position = usize::try_from(pos).unwrap();
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

pub fn count_password(insts: &[Instruction]) -> usize {
    let mut dial = Dial::new(INIT_DIAL_POSITION);
    let mut password = 0;
    for inst in insts {
        dial.rotate(inst);
        if dial.position() == PASSWORD_POSITION {
            password += 1;
        }
    }

    password
}

pub fn read_insts<P: AsRef<Path>>(path: P) -> Result<Vec<Instruction>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut insts = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.trim().is_empty() {
            continue;
        }

        insts.push(Instruction::try_from(s.as_str()).with_context(|| {
            format!(
                "Failed to read instruction from line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?);
    }

    Ok(insts)
}
