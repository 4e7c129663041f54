//! Unit tests for courier-world.

use std::io::Cursor;

use courier_core::{HouseId, Point};

use crate::{HouseTable, WorldError, load_houses_reader};

// ── HouseTable ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod houses {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut table = HouseTable::new();
        table.insert(HouseId(3), Point::new(10.0, 20.0));
        assert_eq!(table.location(HouseId(3)), Some(Point::new(10.0, 20.0)));
        assert_eq!(table.location(HouseId(4)), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_pairs_later_duplicate_wins() {
        let table = HouseTable::from_pairs([
            (HouseId(0), Point::new(1.0, 1.0)),
            (HouseId(0), Point::new(2.0, 2.0)),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.location(HouseId(0)), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn sorted_ids() {
        let table = HouseTable::from_pairs([
            (HouseId(9), Point::default()),
            (HouseId(1), Point::default()),
            (HouseId(5), Point::default()),
        ]);
        assert_eq!(table.sorted_ids(), vec![HouseId(1), HouseId(5), HouseId(9)]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const CSV: &str = "\
house_id,x,y
0,1200.0,-340.5
1,80.0,2250.0
2,-910.0,66.0
";

    #[test]
    fn loads_three_houses() {
        let table = load_houses_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.location(HouseId(1)), Some(Point::new(80.0, 2250.0)));
        assert_eq!(table.location(HouseId(2)), Some(Point::new(-910.0, 66.0)));
    }

    #[test]
    fn rejects_duplicate_house_id() {
        let csv = "house_id,x,y\n0,1.0,2.0\n0,3.0,4.0\n";
        let err = load_houses_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn rejects_malformed_row() {
        let csv = "house_id,x,y\n0,not-a-number,2.0\n";
        let err = load_houses_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)));
    }

    #[test]
    fn empty_file_gives_empty_table() {
        let table = load_houses_reader(Cursor::new("house_id,x,y\n")).unwrap();
        assert!(table.is_empty());
    }
}
