// SPDX-License-Identifier: AGPL-3.0-or-later
//! Host facts for the `os` command
//!
//! Read-only, synchronous queries. The only failure is an
//! unrecognized flag.

use caravel_core::{CaravelError, CaravelResult};

struct CpuInfo {
    model: String,
    mhz: f64,
}

/// Answer one `os` query.
pub fn report(flag: &str) -> CaravelResult<()> {
    match flag {
        "--EOL" => {
            let eol = if cfg!(windows) { "\\r\\n" } else { "\\n" };
            println!("End of Line character is: {eol}");
        }
        "--cpus" => {
            for (index, cpu) in read_cpus().iter().enumerate() {
                println!("CPU {}:", index + 1);
                println!("  Model: {}", cpu.model);
                println!("  Clock rate: {:.2} GHz", cpu.mhz / 1000.0);
            }
        }
        "--homedir" => {
            let home = directories::UserDirs::new()
                .map(|dirs| dirs.home_dir().display().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!("Home Directory: {home}");
        }
        "--username" => {
            let name = std::env::var("USER")
                .or_else(|_| std::env::var("USERNAME"))
                .unwrap_or_else(|_| "unknown".to_string());
            println!("Current System Username: {name}");
        }
        "--architecture" => {
            println!("CPU Architecture: {}", std::env::consts::ARCH);
        }
        other => return Err(CaravelError::UnknownFlag(other.to_string())),
    }
    Ok(())
}

fn read_cpus() -> Vec<CpuInfo> {
    if let Some(cpus) = read_proc_cpuinfo() {
        if !cpus.is_empty() {
            return cpus;
        }
    }

    // model and clock are unavailable off Linux; still report the count
    let count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (0..count)
        .map(|_| CpuInfo { model: "unknown".to_string(), mhz: 0.0 })
        .collect()
}

fn read_proc_cpuinfo() -> Option<Vec<CpuInfo>> {
    let raw = std::fs::read_to_string("/proc/cpuinfo").ok()?;
    let mut cpus = Vec::new();
    for block in raw.split("\n\n") {
        let mut model = None;
        let mut mhz = None;
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            match key.trim() {
                "model name" => model = Some(value.trim().to_string()),
                "cpu MHz" => mhz = value.trim().parse::<f64>().ok(),
                _ => {}
            }
        }
        if let Some(model) = model {
            cpus.push(CpuInfo { model, mhz: mhz.unwrap_or(0.0) });
        }
    }
    Some(cpus)
}
