//! Comparison charts.
//!
//! One PNG per problem: the function over its domain, the `y = 0` axis and a 
//! marker for every root each method found. Only the `(domain, function, roots)` 
//! view of a [`ProblemOutcome`] is used.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use plotters::prelude::*;
use thiserror::Error;

use crate::problems::runner::ProblemOutcome;
use crate::root_finding::algorithms::Algorithm;
use crate::root_finding::interval::Interval;

const SIZE: (u32, u32) = (1200, 800);
const PURPLE: RGBColor = RGBColor(128, 0, 128);


#[derive(Debug, Error)]
pub enum PlotError { 
    #[error("could not prepare output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("function has no finite values on the plotted domain")]
    EmptyRange,
}

fn drawing<E: std::fmt::Display>(err: E) -> PlotError { 
    PlotError::Drawing(err.to_string())
}


/// File name of the chart for the problem at `ordinal` (1-based). 
pub fn plot_file_name(ordinal: usize) -> String { 
    format!("problem_{ordinal}_solution.png")
}

fn color_of(algorithm: Algorithm) -> RGBColor { 
    match algorithm { 
        Algorithm::Bisection => RED, 
        Algorithm::Newton    => GREEN, 
        Algorithm::Secant    => PURPLE, 
    }
}


/// A root to mark on the chart. 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker { 
    pub algorithm : Algorithm, 
    pub x         : f64, 
    pub y         : f64, 
}

/// Everything needed to draw one chart, computed without touching a backend. 
///
/// [`PlotData`] 
/// ├ `title`   : chart caption  
/// ├ `domain`  : sampled interval  
/// ├ `curve`   : sampled `(x, f(x))`, non-finite samples dropped  
/// ├ `x_range` : `domain` widened to reach every marker  
/// ├ `y_range` : finite extrema of the curve and markers, padded by 10% (at least 1.0)  
/// └ `markers` : one per root and method, grouped by method  
///
/// A root outside `domain` still gets a marker; the axes grow to show it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData { 
    pub title   : String, 
    pub domain  : Interval, 
    pub curve   : Vec<(f64, f64)>, 
    pub x_range : (f64, f64), 
    pub y_range : (f64, f64), 
    pub markers : Vec<Marker>, 
}

impl PlotData { 
    /// # Errors 
    /// └ [`PlotError::EmptyRange`] - no finite sample of the function. 
    pub fn new(outcome: &ProblemOutcome, samples: usize) -> Result<Self, PlotError> { 
        let domain = outcome.domain(); 
        let curve: Vec<(f64, f64)> = domain
            .linspace(samples)
            .into_iter()
            .map(|x| (x, outcome.eval(x)))
            .filter(|(_, y)| y.is_finite())
            .collect();

        if curve.is_empty() { 
            return Err(PlotError::EmptyRange);
        }

        // a root whose value is not finite is drawn on the axis
        let markers: Vec<Marker> = Algorithm::ALL
            .iter()
            .flat_map(|&algorithm| { 
                outcome.roots(algorithm).into_iter().map(move |x| (algorithm, x))
            })
            .filter(|&(_, x)| x.is_finite())
            .map(|(algorithm, x)| { 
                let y = outcome.eval(x); 
                Marker { algorithm, x, y: if y.is_finite() { y } else { 0.0 } }
            })
            .collect();

        let (x_lo, x_hi) = markers
            .iter()
            .fold((domain.low(), domain.high()), |(lo, hi), m| (lo.min(m.x), hi.max(m.x)));

        let (lo, hi) = curve
            .iter()
            .map(|&(_, y)| y)
            .chain(markers.iter().map(|m| m.y))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
        let pad = (0.1 * (hi - lo)).max(1.0); 

        Ok(Self { 
            title   : format!("PROBLEM {}: {}", outcome.ordinal, outcome.name), 
            domain, 
            curve, 
            x_range : (x_lo, x_hi), 
            y_range : (lo - pad, hi + pad), 
            markers, 
        })
    }
}


/// Renders `data` to a PNG at `path`. 
pub fn render(data: &PlotData, path: &Path) -> Result<(), PlotError> { 
    let root = BitMapBackend::new(path, SIZE).into_drawing_area(); 
    root.fill(&WHITE).map_err(drawing)?; 

    let (x0, x1) = data.x_range; 
    let (y0, y1) = data.y_range; 

    let mut chart = ChartBuilder::on(&root)
        .caption(&data.title, ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(LineSeries::new(data.curve.iter().copied(), BLUE.stroke_width(2)))
        .map_err(drawing)?
        .label("f(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(vec![(x0, 0.0), (x1, 0.0)], BLACK.mix(0.3)))
        .map_err(drawing)?;

    for marker in &data.markers { 
        let color = color_of(marker.algorithm); 
        chart
            .draw_series(std::iter::once(Circle::new((marker.x, marker.y), 6, color.filled())))
            .map_err(drawing)?
            .label(format!("{}: {:.4}", marker.algorithm.title(), marker.x))
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)?;

    root.present().map_err(drawing)?; 
    Ok(())
}


/// Writes the chart for `outcome` into `dir` as [`plot_file_name`]. 
///
/// # Returns 
/// └ Path of the written file. 
///
/// # Errors 
/// ├ [`PlotError::Io`]         - `dir` could not be created.  
/// ├ [`PlotError::EmptyRange`] - nothing finite to draw.  
/// └ [`PlotError::Drawing`]    - the backend failed (e.g. no usable font).  
pub fn plot_problem(outcome: &ProblemOutcome, dir: &Path, samples: usize) -> Result<PathBuf, PlotError> { 
    fs::create_dir_all(dir)?; 

    let data = PlotData::new(outcome, samples)?; 
    let path = dir.join(plot_file_name(outcome.ordinal)); 
    render(&data, &path)?; 

    debug!("wrote {}", path.display());
    Ok(path)
}
