use crate::{percent, GIB};
use sysinfo::System;

/// RAM and swap overview.
pub fn summary() -> String {
    let mut sys = System::new();
    sys.refresh_memory();

    let ram_total = sys.total_memory() as f64;
    let ram_used = sys.used_memory() as f64;
    let ram_free = sys.free_memory() as f64;
    let swap_total = sys.total_swap() as f64;
    let swap_used = sys.used_swap() as f64;
    let swap_free = sys.free_swap() as f64;

    format!(
        "*Informazioni Memoria*\n\n\
         *RAM:* {:.1}%\n\
         total: *{:.1}G*\n\
         used: *{:.1}G*\n\
         free: *{:.1}G*\n\n\
         *SWAP:* {:.1}%\n\
         total: *{:.1}G*\n\
         used: *{:.1}G*\n\
         free: *{:.1}G*",
        percent(ram_used, ram_total),
        ram_total / GIB,
        ram_used / GIB,
        ram_free / GIB,
        percent(swap_used, swap_total),
        swap_total / GIB,
        swap_used / GIB,
        swap_free / GIB,
    )
}
