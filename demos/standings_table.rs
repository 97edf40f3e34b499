use pickleball_standings::{StandingsCalculator, TournamentSnapshot};

const BUNDLED: &str = include_str!("tournament.json");

fn main() {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path).unwrap(),
        None => BUNDLED.to_string(),
    };
    let snapshot = TournamentSnapshot::from_json(&json).unwrap();
    let calculator = StandingsCalculator::new();

    println!("Fixtures");
    for summary in calculator.summaries(&snapshot.matches, &snapshot.teams) {
        println!(
            "  {:<12} {} vs {}  {}-{}  {}",
            summary.id,
            summary.team1_name.as_deref().unwrap_or(&summary.team1_id),
            summary.team2_name.as_deref().unwrap_or(&summary.team2_id),
            summary.outcome.team1_match_wins,
            summary.outcome.team2_match_wins,
            summary.status,
        );
    }

    println!();
    println!(
        "{:>3}  {:<20} {:>3} {:>3} {:>4} {:>5} {:>6}",
        "#", "Team", "W", "L", "Pts", "GD", "PD"
    );
    let table = calculator.standings_from_snapshot(&snapshot);
    for row in &table {
        println!(
            "{:>3}  {:<20} {:>3} {:>3} {:>4} {:>5} {:>6}",
            row.rank,
            row.name,
            row.stats.battle_wins,
            row.stats.battle_losses,
            row.stats.points,
            row.games_difference,
            row.points_difference,
        );
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&table).unwrap());
}
