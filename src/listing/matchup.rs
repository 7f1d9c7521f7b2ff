/// `"Terran", "Zerg"` -> `"TvZ"`. An empty race contributes nothing, so two
/// empty names still produce `"v"`.
pub fn derive_match_up(race: &str, opponent: &str) -> String {
    let mut key = initial(race);
    key.push('v');
    key.push_str(&initial(opponent));
    key
}

fn initial(race: &str) -> String {
    race.chars().take(1).flat_map(char::to_uppercase).collect()
}
