/// Renders an integer as decimal text.
///
/// Digits come out least-significant first from repeated division of the
/// magnitude, so they're reversed before the sign is attached. Working on
/// the unsigned magnitude keeps `i64::MIN` representable.
pub fn format_integer(n: i64) -> String {
    let mut magnitude = n.unsigned_abs();
    let mut digits: Vec<char> = vec![];
    loop {
        digits.push(char::from(b'0' + (magnitude % 10) as u8));
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if n < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

pub fn render_result_line(a: i64, b: i64, c: i64) -> String {
    format!(
        "{} + {} = {}\n",
        format_integer(a),
        format_integer(b),
        format_integer(c)
    )
}
