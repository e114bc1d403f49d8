/**
 * MIT License
 *
 * Copyright (c) 2025 Takatoshi Kondo
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Topic and topic-filter validation (C3).

use crate::error::MqttError;

/// Validate a PUBLISH topic: any non-empty MQTT string with no wildcard chars.
pub fn validate_topic(s: &str) -> Result<(), MqttError> {
    if s.contains('+') || s.contains('#') {
        return Err(MqttError::InvalidWildcard);
    }
    Ok(())
}

/// Validate a SUBSCRIBE/UNSUBSCRIBE topic filter.
///
/// Non-empty; `/`-delimited levels; `+` legal only as an entire level;
/// `#` legal only as an entire level and only as the final level.
pub fn validate_filter(s: &str) -> Result<(), MqttError> {
    if s.is_empty() {
        return Err(MqttError::InvalidEmptyFilter);
    }

    let mut levels = s.split('/').peekable();
    while let Some(level) = levels.next() {
        let is_last = levels.peek().is_none();
        if level.contains('+') || level.contains('#') {
            if level.len() != 1 {
                return Err(MqttError::InvalidWildcardPosition);
            }
            if level == "#" && !is_last {
                return Err(MqttError::InvalidWildcardPosition);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_rejects_wildcards() {
        assert_eq!(validate_topic("a/+/c"), Err(MqttError::InvalidWildcard));
        assert_eq!(validate_topic("a/#"), Err(MqttError::InvalidWildcard));
        assert!(validate_topic("a/b/c").is_ok());
    }

    #[test]
    fn filter_legal_examples() {
        for f in ["#", "+", "a/+", "a/#", "+/+", "+/b/#"] {
            assert!(validate_filter(f).is_ok(), "{f} should be legal");
        }
    }

    #[test]
    fn filter_illegal_examples() {
        assert_eq!(validate_filter(""), Err(MqttError::InvalidEmptyFilter));
        assert_eq!(
            validate_filter("a+"),
            Err(MqttError::InvalidWildcardPosition)
        );
        assert_eq!(
            validate_filter("a/##"),
            Err(MqttError::InvalidWildcardPosition)
        );
        assert_eq!(
            validate_filter("+/#/+"),
            Err(MqttError::InvalidWildcardPosition)
        );
    }
}
