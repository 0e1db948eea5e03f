// git protocol v2 的 pkt-line 编码

/// flush包,表示一段协议内容结束
pub const FLUSH_PKT: &[u8] = b"0000";

/// delimiter包,分隔command行和后面的参数行
pub const DELIM_PKT: &[u8] = b"0001";

/// encode one pkt-line: 4-digit lowercase hex length (content + 4-byte header)
/// followed by the content itself.
pub fn pkt_line(content: &str) -> Vec<u8> {
    let mut line = format!("{:04x}", content.len() + 4).into_bytes();
    line.extend_from_slice(content.as_bytes());
    line
}

/// ls-refs 命令的固定请求体
pub fn encode_ls_refs() -> Vec<u8> {
    let mut payload = pkt_line("command=ls-refs\n");
    payload.extend_from_slice(DELIM_PKT);
    payload.extend_from_slice(&pkt_line("peel\n"));
    payload.extend_from_slice(&pkt_line("symrefs\n"));
    payload.extend_from_slice(&pkt_line("unborn\n"));
    payload.extend_from_slice(&pkt_line("ref-prefix refs/\n"));
    payload.extend_from_slice(FLUSH_PKT);
    payload
}

/// fetch 命令的请求体,want_ref 为40位对象id
pub fn encode_fetch(want_ref: &str) -> Vec<u8> {
    let mut payload = pkt_line("command=fetch\n");
    payload.extend_from_slice(DELIM_PKT);
    payload.extend_from_slice(&pkt_line("thin-pack\n"));
    payload.extend_from_slice(&pkt_line("ofs-delta\n"));
    payload.extend_from_slice(&pkt_line(&format!("want {}\n", want_ref)));
    payload.extend_from_slice(FLUSH_PKT);
    payload.extend_from_slice(&pkt_line("done\n"));
    payload.extend_from_slice(FLUSH_PKT);
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkt_line_prefix_equals_len_plus_header() {
        assert_eq!(pkt_line("peel\n"), b"0009peel\n");
        assert_eq!(pkt_line("symrefs\n"), b"000csymrefs\n");
        assert_eq!(pkt_line("unborn\n"), b"000bunborn\n");
        assert_eq!(pkt_line("ref-prefix refs/\n"), b"0015ref-prefix refs/\n");
    }

    #[test]
    fn ls_refs_payload_is_fixed() {
        let expected: &[u8] = b"0014command=ls-refs\n\
            00010009peel\n\
            000csymrefs\n\
            000bunborn\n\
            0015ref-prefix refs/\n\
            0000";
        assert_eq!(encode_ls_refs(), expected);
    }

    #[test]
    fn fetch_want_line_prefix_matches_actual_length() {
        for want_ref in ["0000000000000000000000000000000000000000", "abc", ""] {
            let payload = String::from_utf8(encode_fetch(want_ref)).unwrap();
            let want_line = format!("want {}\n", want_ref);
            let framed = format!("{:04x}{}", want_line.len() + 4, want_line);
            assert!(payload.contains(&framed), "missing {:?} in {:?}", framed, payload);
        }
    }

    #[test]
    fn fetch_payload_sections() {
        let payload = String::from_utf8(encode_fetch("abc")).unwrap();
        assert!(payload.starts_with("0012command=fetch\n0001"));
        assert!(payload.contains("000ethin-pack\n000eofs-delta\n000dwant abc\n"));
        assert!(payload.ends_with("00000009done\n0000"));
    }
}
