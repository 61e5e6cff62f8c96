use super::paint;
use core_permissions::classify;

pub fn run(names: &[String]) {
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
    for name in names {
        let group = classify(Some(name.as_str()));
        println!("  {:<width$}  {}", name, paint(group), width = width);
    }
}
