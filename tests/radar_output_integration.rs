// Cube Format Radar - end to end output
//
// Builds the full three-format comparison and checks the written chart file.

use cube_format_radar::{
    oc_avg, oc_max, oc_min, run, CostProfile, CubeKind, FormatModel, RadarConfig, StorageFormat,
};

fn config_in(dir: &tempfile::TempDir) -> RadarConfig {
    RadarConfig {
        output: dir.path().join("radar.html"),
        ..RadarConfig::default()
    }
}

#[test]
fn test_run_writes_chart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let chart = run(&config).unwrap();
    assert_eq!(chart.traces.len(), 3);

    let html = std::fs::read_to_string(&config.output).unwrap();
    assert!(html.contains("Relative structure size comparison in bits"));
    for name in ["Sauerbraten", "Inexor I", "Inexor II"] {
        assert!(html.contains(name), "missing trace {}", name);
    }
}

#[test]
fn test_custom_title_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("radar.toml"),
        format!("output = {:?}\ntitle = \"Octree bits\"\n", dir.path().join("out.html").display().to_string()),
    )
    .unwrap();

    let config = RadarConfig::discover_in(dir.path()).unwrap();
    run(&config).unwrap();

    let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert!(html.contains("<title>Octree bits</title>"));
}

#[test]
fn test_profiles_match_direct_statistics() {
    for format in StorageFormat::all() {
        let profile = CostProfile::compute(&format);
        for (group, kind) in CubeKind::ALL.iter().enumerate() {
            assert_eq!(profile.values[group * 3], format.min(*kind));
            assert_eq!(profile.values[group * 3 + 1], format.avg(*kind));
            assert_eq!(profile.values[group * 3 + 2], format.max(*kind));
        }
        assert_eq!(profile.values[9], oc_min(&format));
        assert_eq!(profile.values[10], oc_avg(&format));
        assert_eq!(profile.values[11], oc_max(&format));
    }
}

#[test]
fn test_newer_formats_are_smaller_on_average() {
    let profiles: Vec<CostProfile> = StorageFormat::all().iter().map(CostProfile::compute).collect();
    let octant_avg: Vec<f64> = profiles.iter().map(|p| p.values[10]).collect();
    assert_eq!(octant_avg, vec![208.0, 139.0, 130.0]);
}
