use anyhow::{bail, Context, Result};
use roomloop::room::Room;
use roomloop::{DraftCfg, Vec2};
use std::fs;
use std::path::Path;

/// Load a room JSON file. Closed rooms must chain; cached lengths are recomputed.
pub fn load_room<P: AsRef<Path>>(path: P) -> Result<Room> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let room: Room =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(room)
}

/// Write `room` as pretty JSON to `out`, or to stdout when `out` is `None`.
pub fn write_room(room: &Room, out: Option<&Path>) -> Result<()> {
    let doc = serde_json::to_string_pretty(room)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating dir {}", parent.display()))?;
                }
            }
            fs::write(path, doc).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{doc}"),
    }
    Ok(())
}

/// Optional config override; missing fields keep their defaults.
pub fn load_cfg(path: Option<&Path>) -> Result<DraftCfg> {
    let cfg = match path {
        Some(path) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => DraftCfg::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Parse `"x,y x,y ..."` (whitespace or `;` separated pairs).
pub fn parse_points(s: &str) -> Result<Vec<Vec2<f64>>> {
    s.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            let Some((x, y)) = tok.split_once(',') else {
                bail!("expected x,y but got {tok:?}");
            };
            let x: f64 = x.trim().parse().with_context(|| format!("bad x in {tok:?}"))?;
            let y: f64 = y.trim().parse().with_context(|| format!("bad y in {tok:?}"))?;
            Ok(Vec2::new(x, y))
        })
        .collect()
}
