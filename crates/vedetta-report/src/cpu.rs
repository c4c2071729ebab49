use sysinfo::System;
use vedetta_common::fmt::format_duration_long;

/// CPU overview: total usage, core count, load averages, uptime.
pub fn summary() -> String {
    let mut sys = System::new();
    sys.refresh_cpu_usage();
    // Usage is a delta between two refreshes.
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();

    let total = sys.global_cpu_usage();
    let cores = sys.cpus().len();
    let load = System::load_average();
    let uptime = System::uptime();

    format!(
        "*Informazioni CPU*\n\
         Utilizzo totale: *{total:.1}%*\n\n\
         *Cores:* {cores} logici\n\n\
         *Load Average*\n\
         1 min: *{:.2}*\n\
         5 min: *{:.2}*\n\
         15 min: *{:.2}*\n\n\
         *Uptime:* {}",
        load.one,
        load.five,
        load.fifteen,
        format_duration_long(uptime)
    )
}
