//! CSV export of the current attendance sheet.
//!
//! One data row per seat in roster order, `unmarked` written literally for
//! seats without a record.

use std::io;
use std::path::Path;

use csv::Writer;

use crate::attendance::AttendanceStore;
use crate::roster::Roster;

/// Write the sheet as CSV rows `(date, student, status)` to any sink.
pub fn write_csv<W: io::Write>(
    writer: W,
    roster: &Roster,
    store: &AttendanceStore,
) -> Result<(), csv::Error> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["Date", "Student", "Status"])?;

    let date = store.date().to_string();
    for seat in roster.seats() {
        out.write_record([
            date.as_str(),
            seat.id.student.as_str(),
            store.status_of(&seat.id).as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write the sheet as a CSV file at `path`.
pub fn write_csv_path(
    path: &Path,
    roster: &Roster,
    store: &AttendanceStore,
) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path).map_err(csv::Error::from)?;
    write_csv(io::BufWriter::new(file), roster, store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::{DateKey, Status};
    use crate::persist::SheetStore;
    use crate::roster::SeatId;
    use tempfile::TempDir;

    fn export_lines(roster: &Roster, store: &AttendanceStore) -> Vec<String> {
        let mut buf = Vec::new();
        write_csv(&mut buf, roster, store).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn exports_header_plus_one_row_per_seat() {
        let dir = TempDir::new().unwrap();
        let roster = Roster::from_columns(vec![
            vec!["A".into(), "B".into()],
            vec!["C".into(), "D".into(), "E".into()],
        ])
        .unwrap();
        let store = AttendanceStore::new(
            SheetStore::open(dir.path()).unwrap(),
            DateKey::from_ymd(2024, 3, 4).unwrap(),
        );

        let lines = export_lines(&roster, &store);
        assert_eq!(lines.len(), roster.seat_count() + 1);
        assert_eq!(lines[0], "Date,Student,Status");
    }

    #[test]
    fn cycled_seat_exports_present_others_unmarked() {
        let dir = TempDir::new().unwrap();
        let roster =
            Roster::from_columns(vec![vec!["ALPHA".into(), "BETA".into()]]).unwrap();
        let mut store = AttendanceStore::new(
            SheetStore::open(dir.path()).unwrap(),
            DateKey::from_ymd(2024, 1, 1).unwrap(),
        );
        store.cycle(SeatId::new(0, "ALPHA")).unwrap();

        let lines = export_lines(&roster, &store);
        assert_eq!(lines[1], "2024-01-01,ALPHA,present");
        assert_eq!(lines[2], "2024-01-01,BETA,unmarked");
    }

    #[test]
    fn rows_follow_roster_order_not_mark_order() {
        let dir = TempDir::new().unwrap();
        let roster = Roster::from_columns(vec![
            vec!["A".into()],
            vec!["B".into()],
            vec!["C".into()],
        ])
        .unwrap();
        let mut store = AttendanceStore::new(
            SheetStore::open(dir.path()).unwrap(),
            DateKey::from_ymd(2024, 1, 1).unwrap(),
        );
        store.set(SeatId::new(2, "C"), Status::Absent).unwrap();
        store.set(SeatId::new(0, "A"), Status::Present).unwrap();

        let lines = export_lines(&roster, &store);
        assert_eq!(lines[1], "2024-01-01,A,present");
        assert_eq!(lines[2], "2024-01-01,B,unmarked");
        assert_eq!(lines[3], "2024-01-01,C,absent");
    }

    #[test]
    fn write_csv_path_creates_the_file() {
        let dir = TempDir::new().unwrap();
        let roster = Roster::from_columns(vec![vec!["A".into()]]).unwrap();
        let store = AttendanceStore::new(
            SheetStore::open(dir.path()).unwrap(),
            DateKey::from_ymd(2024, 1, 1).unwrap(),
        );

        let path = dir.path().join("attendance.csv");
        write_csv_path(&path, &roster, &store).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Date,Student,Status"));
    }
}
