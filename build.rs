use time::OffsetDateTime;
use time::macros::format_description;

fn main() {
    // 本地时区获取失败时（例如多线程环境）退回UTC
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let built = now.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")).unwrap_or_default();
    println!("cargo:rustc-env=SST_BUILD_TIME={built}");
    println!("cargo:rerun-if-changed=build.rs");
}
