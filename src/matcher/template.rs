//! # 替换模板转换
//!
//! 将 `\1`、`\g<1>`、`\g<name>` 形式的反向引用转换为 `regex` 的 `${1}` / `${name}` 语法。
//!
//! ## 规则
//! - `\1` .. `\99`：编号组（最多两位数字）
//! - `\g<...>`：编号组或命名组
//! - `\\`：字面反斜杠
//! - 用户写下的 `$` 一律是字面字符，转义为 `$$`
//! - 其他转义原样保留
//!
//! ## 依赖关系
//! - 被 `matcher/mod.rs` 使用

/// 转换替换模板
pub fn translate(template: &str) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '$' {
            out.push_str("$$");
            i += 1;
            continue;
        }
        if c != '\\' || i + 1 >= chars.len() {
            out.push(c);
            i += 1;
            continue;
        }

        let next = chars[i + 1];
        match next {
            '1'..='9' => {
                let mut end = i + 2;
                if end < chars.len() && chars[end].is_ascii_digit() {
                    end += 1;
                }
                let group: String = chars[i + 1..end].iter().collect();
                out.push_str(&format!("${{{}}}", group));
                i = end;
            }
            'g' => match group_name(&chars, i + 2) {
                Some((name, end)) => {
                    out.push_str(&format!("${{{}}}", name));
                    i = end;
                }
                None => {
                    out.push_str("\\g");
                    i += 2;
                }
            },
            '\\' => {
                out.push('\\');
                i += 2;
            }
            _ => {
                out.push('\\');
                out.push(next);
                i += 2;
            }
        }
    }

    out
}

/// 解析 `<name>`，返回组名和结束位置
fn group_name(chars: &[char], start: usize) -> Option<(String, usize)> {
    if chars.get(start) != Some(&'<') {
        return None;
    }
    let close = chars[start + 1..].iter().position(|&c| c == '>')? + start + 1;
    let name: String = chars[start + 1..close].iter().collect();
    let valid = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    valid.then_some((name, close + 1))
}
