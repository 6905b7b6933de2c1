use chartkit::selection::{closest_data_set_index, minimum_distance, AxisDependency, SelectionDetail};
use chartkit::AxisDependency::{Primary, Secondary};

fn sel(value: f64, index: usize, axis: Option<AxisDependency>) -> SelectionDetail {
    SelectionDetail::new(value, index, axis)
}

#[test]
fn picks_closest_on_filtered_axis() {
    let vals = [sel(1.0, 0, Some(Primary)), sel(5.0, 1, Some(Primary))];
    assert_eq!(closest_data_set_index(&vals, 4.9, Some(Primary)), Some(1));
}

#[test]
fn empty_list_has_no_closest() {
    assert_eq!(closest_data_set_index(&[], 4.9, None), None);
    assert_eq!(closest_data_set_index(&[], 4.9, Some(Secondary)), None);
}

#[test]
fn returns_series_index_not_position() {
    let vals = [sel(10.0, 7, Some(Primary)), sel(2.0, 3, Some(Primary))];
    assert_eq!(closest_data_set_index(&vals, 1.0, None), Some(3));
}

#[test]
fn axis_filter_skips_other_axis() {
    let vals = [sel(1.0, 0, Some(Primary)), sel(5.0, 1, Some(Secondary))];
    assert_eq!(closest_data_set_index(&vals, 4.9, Some(Primary)), Some(0));
    assert_eq!(closest_data_set_index(&vals, 4.9, None), Some(1));
}

#[test]
fn untagged_candidates_only_match_without_filter() {
    let vals = [sel(5.0, 2, None)];
    assert_eq!(closest_data_set_index(&vals, 5.0, Some(Primary)), None);
    assert_eq!(closest_data_set_index(&vals, 5.0, None), Some(2));
}

#[test]
fn first_of_equal_distances_wins() {
    let vals = [sel(3.0, 4, Some(Primary)), sel(5.0, 7, Some(Primary))];
    assert_eq!(closest_data_set_index(&vals, 4.0, None), Some(4));
}

#[test]
fn nan_values_never_win() {
    let vals = [sel(f64::NAN, 0, Some(Primary)), sel(100.0, 1, Some(Primary))];
    assert_eq!(closest_data_set_index(&vals, 0.0, None), Some(1));
    assert_eq!(closest_data_set_index(&vals[..1], 0.0, None), None);
}

#[test]
fn minimum_distance_per_axis() {
    let vals = [
        sel(1.0, 0, Some(Primary)),
        sel(5.0, 1, Some(Primary)),
        sel(10.0, 2, Some(Secondary)),
    ];
    assert_eq!(minimum_distance(&vals, 9.0, Primary), Some(4.0));
    assert_eq!(minimum_distance(&vals, 9.0, Secondary), Some(1.0));
}

#[test]
fn minimum_distance_without_match_is_none() {
    let vals = [sel(1.0, 0, Some(Primary)), sel(2.0, 1, None)];
    assert_eq!(minimum_distance(&vals, 0.0, Secondary), None);
    assert_eq!(minimum_distance(&[], 0.0, Primary), None);
}

#[test]
fn axis_names_parse_with_aliases() {
    assert_eq!("left".parse::<AxisDependency>(), Ok(Primary));
    assert_eq!("Secondary".parse::<AxisDependency>(), Ok(Secondary));
    assert!("top".parse::<AxisDependency>().is_err());
    assert_eq!(Secondary.to_string(), "secondary");
}

#[test]
fn candidates_deserialize_from_toml() {
    #[derive(serde::Deserialize)]
    struct File {
        candidates: Vec<SelectionDetail>,
    }

    let parsed: File = toml::from_str(
        r#"
        [[candidates]]
        value = 3.5
        data_set_index = 0
        axis = "left"

        [[candidates]]
        value = 8.0
        series = 4
        axis = "secondary"

        [[candidates]]
        value = 1.0
        series = 9
        "#,
    )
    .unwrap();

    assert_eq!(parsed.candidates[0], sel(3.5, 0, Some(Primary)));
    assert_eq!(parsed.candidates[1], sel(8.0, 4, Some(Secondary)));
    assert_eq!(parsed.candidates[2].axis, None);
    assert_eq!(closest_data_set_index(&parsed.candidates, 7.0, Some(Secondary)), Some(4));
}
