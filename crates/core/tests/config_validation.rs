use hexmap::{GridConfig, HexError, HexGrid, TileGrid};
use validator::ValidationErrors;

/// Get the sorted names of every field that failed validation
fn error_fields(err: anyhow::Error) -> Vec<&'static str> {
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        hex_radius: -1.0, // invalid
        rows: 0,          // invalid (too small)
        columns: 10_000,  // valid (but huge)
    };

    let err = HexGrid::from_config(&config).unwrap_err();
    assert_eq!(error_fields(err), vec!["hex_radius", "rows"]);

    let err = TileGrid::from_config(&config, |_| ()).unwrap_err();
    assert_eq!(error_fields(err), vec!["hex_radius", "rows"]);
}

#[test]
fn test_grid_config_upper_bounds() {
    let config = GridConfig {
        hex_radius: 1_000_001.0, // invalid (too big)
        rows: 10_001,            // invalid (too big)
        columns: 1,              // valid
    };
    let err = HexGrid::from_config(&config).unwrap_err();
    assert_eq!(error_fields(err), vec!["hex_radius", "rows"]);
}

#[test]
fn test_zero_radius() {
    // Zero passes validation, but the grid can't map anything with it
    let config = GridConfig {
        hex_radius: 0.0,
        ..GridConfig::default()
    };
    let err = HexGrid::from_config(&config).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<HexError>(),
            Some(HexError::InvalidArgument { .. })
        ),
        "unexpected error: {:#}",
        err
    );
    // Tile grids don't care about the radius
    assert!(TileGrid::from_config(&config, |_| ()).is_ok());
}

#[test]
fn test_config_from_json() {
    let config: GridConfig =
        serde_json::from_str(r#"{"hex_radius": 3.0, "rows": 4, "columns": 5}"#)
            .unwrap();
    let grid = HexGrid::from_config(&config).unwrap();
    assert_eq!(grid.hex_radius(), 3.0);
    let tiles =
        TileGrid::from_config(&config, |coords| coords.to_key()).unwrap();
    assert_eq!(tiles.len(), 20);
    assert_eq!(tiles.tiles()[0].data, "0,0,0");
}
