use restwell_core::sleep_tips;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for tip in sleep_tips() {
        println!("{} [{}] {}", tip.icon, tip.category, tip.tip);
    }
    Ok(())
}
