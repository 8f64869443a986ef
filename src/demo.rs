//! Printable walkthroughs of the vector, matrix and area exercises.
//!
//! Every demo writes to a caller-supplied sink so the binary can print to
//! stdout and the tests can capture the text.

use std::io::Write;

use anyhow::{Context, Result};
use int_vector::IntVector;
use log::{debug, info};

use crate::area::{
    checked_rectangle_area, checked_square_area, circle_area, rectangle_area, square_area,
};
use crate::matrix::IntMatrix;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorDemo {
    pub values: Vec<i32>,
    /// How many elements to pop before copying.
    pub pops: usize,
    /// Print `len`/`capacity` after each phase.
    pub show_capacity: bool,
}

impl Default for VectorDemo {
    fn default() -> Self {
        Self {
            values: vec![10, 20, 30],
            pops: 1,
            show_capacity: false,
        }
    }
}

/// Push the values, pop `pops` of them, then copy the vector, printing the
/// elements after each step.
pub fn vector_demo<W: Write>(out: &mut W, demo: &VectorDemo) -> Result<()> {
    let mut vec = IntVector::new();
    for &value in &demo.values {
        vec.push(value);
    }
    info!("pushed {} values, capacity {}", vec.len(), vec.capacity());
    print_elements(out, &vec, demo.show_capacity)?;

    for _ in 0..demo.pops {
        let popped = vec.pop().context("pop_back failed")?;
        debug!("popped {}", popped);
    }
    writeln!(out, "After pop_back:")?;
    print_elements(out, &vec, demo.show_capacity)?;

    let copy = vec.clone();
    writeln!(out, "After copy:")?;
    print_elements(out, &copy, demo.show_capacity)?;
    Ok(())
}

fn print_elements<W: Write>(out: &mut W, vec: &IntVector, show_capacity: bool) -> Result<()> {
    for (i, value) in vec.iter().enumerate() {
        writeln!(out, "Element at index {}: {}", i, value)?;
    }
    if show_capacity {
        writeln!(out, "len: {}, capacity: {}", vec.len(), vec.capacity())?;
    }
    Ok(())
}

pub fn demo_matrices() -> Result<(IntMatrix, IntMatrix)> {
    let a = IntMatrix::from_rows(vec![vec![4, 1, 2], vec![1, 5, 4], vec![2, 3, 3]])?;
    let b = IntMatrix::from_rows(vec![vec![3, 3, 1], vec![1, 2, 2], vec![4, 2, 3]])?;
    Ok((a, b))
}

pub fn matrix_demo<W: Write>(out: &mut W) -> Result<()> {
    let (a, b) = demo_matrices()?;

    writeln!(out, "Addition:")?;
    writeln!(out, "{}", (&a + &b).context("addition")?)?;

    writeln!(out, "Subtraction:")?;
    writeln!(out, "{}", (&a - &b).context("subtraction")?)?;

    writeln!(out, "Multiplication:")?;
    writeln!(out, "{}", (&a * &b).context("multiplication")?)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaDemo {
    pub length: f64,
    pub width: f64,
    pub side: f64,
    pub radius: f64,
}

impl Default for AreaDemo {
    fn default() -> Self {
        Self {
            length: 5.0,
            width: 3.0,
            side: 4.0,
            radius: 2.0,
        }
    }
}

/// Prints each area once with the inputs truncated to integers and once as
/// floating point.
pub fn area_demo<W: Write>(out: &mut W, demo: &AreaDemo) -> Result<()> {
    let (l, w) = (demo.length as i64, demo.width as i64);
    let (s, r) = (demo.side as i64, demo.radius as i64);

    let rectangle = checked_rectangle_area(l, w)
        .with_context(|| format!("rectangle area for {} x {} overflows", l, w))?;
    writeln!(out, "Area of Rectangle ({}, {}): {}", l, w, rectangle)?;
    let square =
        checked_square_area(s).with_context(|| format!("square area for side {} overflows", s))?;
    writeln!(out, "Area of Square ({}): {}", s, square)?;
    let circle =
        circle_area(r).with_context(|| format!("circle area for radius {} overflows", r))?;
    writeln!(out, "Area of Circle (radius {}): {}", r, circle)?;

    writeln!(
        out,
        "Area of Rectangle ({}, {}): {}",
        demo.length,
        demo.width,
        rectangle_area(demo.length, demo.width)
    )?;
    writeln!(out, "Area of Square ({}): {}", demo.side, square_area(demo.side))?;
    let circle = circle_area(demo.radius)
        .with_context(|| format!("circle area for radius {} overflows", demo.radius))?;
    writeln!(out, "Area of Circle (radius {}): {}", demo.radius, circle)?;
    Ok(())
}
