use crate::types::MazeError;

/// Classification of one maze cell. Start and End are traversable like Path;
/// they only differ for game-state logic outside the traversal core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Path,
    Start,
    End,
}

/// Presentation metadata for a cell kind. The traversal core never reads
/// this; renderers and the editor do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub label: &'static str,
    pub class: &'static str,
    pub background: &'static str,
}

const WALL_STYLE: CellStyle = CellStyle {
    label: "Wall",
    class: "mazeWall",
    background: "black",
};

const PATH_STYLE: CellStyle = CellStyle {
    label: "Path",
    class: "mazePath",
    background: "white",
};

const START_STYLE: CellStyle = CellStyle {
    label: "Start",
    class: "mazeStart",
    background: "lightgreen",
};

const END_STYLE: CellStyle = CellStyle {
    label: "End",
    class: "mazeEnd",
    background: "red",
};

impl CellKind {
    /// Whether a ray or a moving agent may occupy this cell.
    #[inline]
    pub fn is_traversable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Parse a serialized classification label. Unknown labels are an error,
    /// never a silent default.
    pub fn from_label(label: &str) -> Result<Self, MazeError> {
        match label {
            "Wall" => Ok(CellKind::Wall),
            "Path" => Ok(CellKind::Path),
            "Start" => Ok(CellKind::Start),
            "End" => Ok(CellKind::End),
            other => Err(MazeError::UnknownCellKind(other.to_string())),
        }
    }

    #[inline]
    pub fn label(self) -> &'static str {
        self.style().label
    }

    #[inline]
    pub fn style(self) -> &'static CellStyle {
        match self {
            CellKind::Wall => &WALL_STYLE,
            CellKind::Path => &PATH_STYLE,
            CellKind::Start => &START_STYLE,
            CellKind::End => &END_STYLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_block_everything_else_does_not() {
        assert!(!CellKind::Wall.is_traversable());
        assert!(CellKind::Path.is_traversable());
        assert!(CellKind::Start.is_traversable());
        assert!(CellKind::End.is_traversable());
    }

    #[test]
    fn labels_round_trip() {
        for kind in [CellKind::Wall, CellKind::Path, CellKind::Start, CellKind::End] {
            assert_eq!(CellKind::from_label(kind.label()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = CellKind::from_label("Lava").unwrap_err();
        assert!(matches!(err, MazeError::UnknownCellKind(_)));
    }

    #[test]
    fn styles_match_kind() {
        assert_eq!(CellKind::Wall.style().background, "black");
        assert_eq!(CellKind::Start.style().class, "mazeStart");
    }
}
