use crate::stream::{clamp_percent, Stream};

/*
Sink Input Status Parser
========================

Turns the free-form text printed by `pactl list sink-inputs` into an ordered
list of `Stream`s. Only three attributes matter; everything else is noise.

Input Shape
-----------

    Sink Input #5                       <- block start, id = "5"
        Driver: protocol-native.c
        Volume: front-left: 26214 /  40% / -23.88 dB,   front-right: ...
        Properties:
            media.name = "Playback"     <- name, only if still empty
            application.name = "mpv"    <- name, always wins
    Sink Input #12                      <- finalizes #5, opens #12
        ...

Every line is trimmed before matching, so indentation is irrelevant.


Name Priority
-------------

  application.name   overwrites whatever is there (highest priority)
  media.name         only fills an empty name (fallback)

Because the application name overwrites unconditionally, it wins no matter
which of the two lines comes first in the block.


Volume
------

The `Volume:` line lists one entry per channel. The first token ending in
`%` is taken as the stream volume and clamped to [0, 100]; if that token is
not an integer the previous value stays.


Failure Policy
--------------

Nothing here fails. Unknown or malformed lines are skipped, a block without
an id is dropped, and a block without attributes yields volume 0 and an
empty name.
*/

const BLOCK_START: &str = "Sink Input #";
const APPLICATION_NAME: &str = "application.name";
const MEDIA_NAME: &str = "media.name";
const VOLUME: &str = "Volume:";

/// Parse sink-input status text into streams, in enumeration order
pub fn parse(raw: &str) -> Vec<Stream> {
    let mut streams = Vec::new();
    let mut current = Stream::default();

    for line in raw.lines().map(str::trim) {
        if let Some(id) = line.strip_prefix(BLOCK_START) {
            finalize(&mut streams, std::mem::take(&mut current));
            current.id = id.trim().to_string();
        } else if line.starts_with(APPLICATION_NAME) {
            current.name = extract_value(line).to_string();
        } else if line.starts_with(MEDIA_NAME) {
            if current.name.is_empty() {
                current.name = extract_value(line).to_string();
            }
        } else if line.starts_with(VOLUME) {
            if let Some(volume) = extract_volume(line) {
                current.volume = volume;
            }
        }
    }
    finalize(&mut streams, current);

    streams
}

fn finalize(streams: &mut Vec<Stream>, mut block: Stream) {
    if block.id.is_empty() {
        return;
    }
    block.display_volume = block.volume;
    streams.push(block);
}

/// Value of a `key = "value"` or `key: value` line, unquoted and trimmed
pub fn extract_value(line: &str) -> &str {
    let value = match line.split_once('=') {
        Some((_, value)) => value,
        None => match line.split_once(':') {
            Some((_, value)) => value,
            None => return "",
        },
    };
    value.trim_matches(|c: char| c == '"' || c.is_whitespace())
}

/// Clamped percent of the first `%`-suffixed token, if it parses
pub fn extract_volume(line: &str) -> Option<u8> {
    let token = line
        .split_whitespace()
        .find_map(|token| token.strip_suffix('%'))?;
    token.parse::<i64>().ok().map(clamp_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_INPUTS: &str = "\
Sink Input #5
\tDriver: protocol-native.c
\tOwner Module: 10
\tSink: 0
\tVolume: front-left: 26214 /  40% / -23.88 dB,   front-right: 26214 /  40% / -23.88 dB
\t        balance 0.00
\tMute: no
\tProperties:
\t\tmedia.name = \"Playback\"
\t\tapplication.name = \"Firefox\"
\t\tapplication.process.id = \"4242\"

Sink Input #12
\tDriver: protocol-native.c
\tVolume: mono: 49152 /  75% / -7.50 dB
\tProperties:
\t\tmedia.name = \"Spotify - Track\"
";

    #[test]
    fn parses_blocks_in_order() {
        let streams = parse(TWO_INPUTS);
        assert_eq!(
            streams,
            vec![
                Stream::new("5", "Firefox", 40),
                Stream::new("12", "Spotify - Track", 75),
            ]
        );
    }

    #[test]
    fn application_name_wins_regardless_of_order() {
        let before = "Sink Input #1\napplication.name = \"mpv\"\nmedia.name = \"video.mkv\"\n";
        let after = "Sink Input #1\nmedia.name = \"video.mkv\"\napplication.name = \"mpv\"\n";
        assert_eq!(parse(before)[0].name, "mpv");
        assert_eq!(parse(after)[0].name, "mpv");
    }

    #[test]
    fn bare_block_defaults_to_silent_and_unnamed() {
        let streams = parse("Sink Input #7\nSink Input #8\nVolume: mono: 1 / 30% / x\n");
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0], Stream::new("7", "", 0));
        assert_eq!(streams[1].volume, 30);
    }

    #[test]
    fn volumes_are_clamped() {
        let streams = parse(
            "Sink Input #1\nVolume: front-left: 98304 / 150% / 10.57 dB\n\
             Sink Input #2\nVolume: mono: -5% \n",
        );
        assert_eq!(streams[0].volume, 100);
        assert_eq!(streams[0].display_volume, 100);
        assert_eq!(streams[1].volume, 0);
    }

    #[test]
    fn unparsable_volume_keeps_previous_value() {
        let streams = parse("Sink Input #1\nVolume: mono: 60%\nVolume: mono: loud%\n");
        assert_eq!(streams[0].volume, 60);
    }

    #[test]
    fn lines_before_first_block_are_ignored() {
        let streams = parse("application.name = \"ghost\"\nVolume: 90%\nSink Input #3\n");
        assert_eq!(streams, vec![Stream::new("3", "", 0)]);
    }

    #[test]
    fn empty_and_garbage_input_yield_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("Connection failure: Connection refused\n\n???").is_empty());
        assert!(parse("Sink Input #\nVolume: 50%\n").is_empty());
    }

    #[test]
    fn extract_value_handles_both_separators() {
        assert_eq!(extract_value("application.name = \"Firefox\""), "Firefox");
        assert_eq!(extract_value("media.name = \"a = b\""), "a = b");
        assert_eq!(extract_value("Driver: protocol-native.c"), "protocol-native.c");
        assert_eq!(extract_value("application.name"), "");
    }

    #[test]
    fn extract_volume_takes_first_percent_token() {
        assert_eq!(
            extract_volume("Volume: front-left: 26214 /  40% / -23.88 dB,   front-right: 0 / 0%"),
            Some(40)
        );
        assert_eq!(extract_volume("Volume: front-left: 26214"), None);
        assert_eq!(extract_volume("Volume: x% 20%"), None);
    }

    #[test]
    fn every_parsed_volume_is_in_range() {
        let samples = ["-1%", "0%", "100%", "101%", "99999999999999999999%", "12%"];
        for sample in samples {
            let text = format!("Sink Input #1\nVolume: mono: {sample}\n");
            for stream in parse(&text) {
                assert!(stream.volume <= 100, "{sample} produced {}", stream.volume);
                assert!(stream.display_volume <= 100);
            }
        }
    }
}
