//! Rules grid.

use fair_rps_core::OutcomeRelation;
use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::{Alignment, Modify, Style};

/// Corner label: rows are the user's move, columns the computer's
const CORNER: &str = "v User \\ PC >";

/// Render the relation as an ASCII grid.
///
/// Each cell is the result for the move in its row when played against
/// the move in its column.
pub fn render(relation: &OutcomeRelation) -> String {
    let moves = relation.moves();
    let mut builder = Builder::default();

    let header: Vec<String> = std::iter::once(CORNER.to_string())
        .chain(moves.iter().map(|m| m.to_string()))
        .collect();
    builder.push_record(header);

    for (row, m) in moves.iter().enumerate() {
        let record: Vec<String> = std::iter::once(m.to_string())
            .chain((0..moves.len()).map(|col| relation.outcome_at(row, col).to_string()))
            .collect();
        builder.push_record(record);
    }

    let mut table = builder.build();
    table
        .with(Style::ascii())
        .with(Modify::new(Segment::all()).with(Alignment::center()));
    table.to_string()
}
