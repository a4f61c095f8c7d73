use std::{fmt, str::FromStr};

use crate::placer::PlacementError;

/// Box layouts understood by [`convert_box`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxFormat {
    /// Center x, center y, width, height
    Xywh,
    /// Top-left and bottom-right corners
    X1y1x2y2,
}

impl FromStr for BoxFormat {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xywh" => Ok(BoxFormat::Xywh),
            "x1y1x2y2" => Ok(BoxFormat::X1y1x2y2),
            other => Err(PlacementError::InvalidBoxFormat(other.to_string())),
        }
    }
}

impl fmt::Display for BoxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxFormat::Xywh => write!(f, "xywh"),
            BoxFormat::X1y1x2y2 => write!(f, "x1y1x2y2"),
        }
    }
}

/// Converts `b` into the `out` layout. The input is assumed to be in the other one.
pub fn convert_box(b: [f64; 4], out: BoxFormat) -> [f64; 4] {
    match out {
        BoxFormat::Xywh => {
            let [x1, y1, x2, y2] = b;
            [(x1 + x2) / 2.0, (y1 + y2) / 2.0, x2 - x1, y2 - y1]
        }
        BoxFormat::X1y1x2y2 => {
            let [x, y, w, h] = b;
            [x - w / 2.0, y - h / 2.0, x + w / 2.0, y + h / 2.0]
        }
    }
}

pub fn convert_box_named(b: [f64; 4], out: &str) -> Result<[f64; 4], PlacementError> {
    Ok(convert_box(b, out.parse()?))
}

/// Truncates toward zero, like an `as` cast per coordinate.
pub fn truncate_box(b: [f64; 4]) -> [i32; 4] {
    b.map(|v| v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_round_trip_exactly() {
        let boxes = [
            [0.0, 0.0, 1.0, 1.0],
            [3.0, 7.0, 20.0, 8.0],
            [10.0, 11.0, 63.0, 62.0],
            [5.0, 5.0, 5.0, 5.0],
        ];
        for b in boxes {
            let center = convert_box(b, BoxFormat::Xywh);
            assert_eq!(convert_box(center, BoxFormat::X1y1x2y2), b);
        }
    }

    #[test]
    fn center_to_corners() {
        let b = convert_box([32.0, 20.0, 10.0, 6.0], BoxFormat::X1y1x2y2);
        assert_eq!(b, [27.0, 17.0, 37.0, 23.0]);
        assert_eq!(truncate_box([26.5, 17.25, 37.5, 22.75]), [26, 17, 37, 22]);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = convert_box_named([0.0; 4], "cxcywh").unwrap_err();
        assert!(matches!(err, PlacementError::InvalidBoxFormat(ref s) if s == "cxcywh"));
        assert_eq!(
            convert_box_named([1.0, 1.0, 3.0, 5.0], "xywh").unwrap(),
            [2.0, 3.0, 2.0, 4.0]
        );
        assert_eq!("x1y1x2y2".parse::<BoxFormat>().unwrap().to_string(), "x1y1x2y2");
    }
}
