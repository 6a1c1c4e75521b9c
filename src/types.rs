/// Return a 'minimal' representation of the given number, rounded
/// to `sig` significant digits: no trailing zeros, no trailing '.'.
pub fn fstr(x: f64, sig: u32) -> String {
    if x == 0. {
        return "0".to_string();
    }
    if !x.is_finite() {
        return x.to_string();
    }
    let mag = x.abs().log10().floor() as i32;
    let decimals = sig as i32 - 1 - mag;
    if decimals <= 0 {
        let scale = 10f64.powi(-decimals);
        format!("{:.0}", (x / scale).round() * scale)
    } else {
        let result = format!("{:.*}", decimals as usize, x);
        if result.contains('.') {
            result.trim_end_matches('0').trim_end_matches('.').into()
        } else {
            result
        }
    }
}
