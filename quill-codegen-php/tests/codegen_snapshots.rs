//! Snapshot tests for PHP code generation.
//!
//! Programs are written as JSON, the same format the CLI loads.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use quill_codegen::{GenerateError, GeneratorOptions, IndexOrigin, NameDatabase, generate};
use quill_codegen_php::Php;
use quill_ir::Program;

fn render_with(json: &str, options: GeneratorOptions) -> Result<String, GenerateError> {
    let program: Program = serde_json::from_str(json).expect("Failed to parse program");
    let mut names = NameDatabase::for_dialect(&Php);
    generate(&program, &Php, &mut names, options)
}

fn render(json: &str) -> String {
    render_with(json, GeneratorOptions::default()).expect("Failed to generate")
}

#[test]
fn test_associative_chains_drop_redundant_parens() {
    let code = render(
        r#"{
          "variables": [
            { "id": "a", "name": "a" },
            { "id": "b", "name": "b" },
            { "id": "c", "name": "c" }
          ],
          "blocks": [{
            "kind": "text_print",
            "value": {
              "kind": "math_arithmetic", "op": "ADD",
              "a": { "kind": "variables_get", "variable": "a" },
              "b": {
                "kind": "math_arithmetic", "op": "ADD",
                "a": { "kind": "variables_get", "variable": "b" },
                "b": { "kind": "variables_get", "variable": "c" }
              }
            },
            "next": {
              "kind": "text_print",
              "value": {
                "kind": "math_arithmetic", "op": "ADD",
                "a": {
                  "kind": "math_arithmetic", "op": "ADD",
                  "a": { "kind": "variables_get", "variable": "a" },
                  "b": { "kind": "variables_get", "variable": "b" }
                },
                "b": { "kind": "variables_get", "variable": "c" }
              },
              "next": {
                "kind": "text_print",
                "value": {
                  "kind": "math_arithmetic", "op": "MINUS",
                  "a": { "kind": "variables_get", "variable": "a" },
                  "b": {
                    "kind": "math_arithmetic", "op": "MINUS",
                    "a": { "kind": "variables_get", "variable": "b" },
                    "b": { "kind": "variables_get", "variable": "c" }
                  }
                }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $a;
    $b;
    $c;


    print($a + $b + $c);
    print($a + $b + $c);
    print($a - ($b - $c));
    "#);
}

const LIST_ACCESS: &str = r#"{
  "variables": [
    { "id": "xs", "name": "xs" },
    { "id": "i", "name": "i" }
  ],
  "blocks": [{
    "kind": "variables_set", "variable": "xs",
    "value": {
      "kind": "lists_create_with",
      "items": [
        { "kind": "math_number", "value": 1 },
        null,
        { "kind": "math_number", "value": 3 }
      ]
    },
    "next": {
      "kind": "text_print",
      "value": {
        "kind": "lists_get_index", "mode": "GET", "where": "FROM_START",
        "list": { "kind": "variables_get", "variable": "xs" },
        "at": { "kind": "math_number", "value": 1 }
      },
      "next": {
        "kind": "text_print",
        "value": {
          "kind": "lists_get_index", "mode": "GET", "where": "FROM_START",
          "list": { "kind": "variables_get", "variable": "xs" },
          "at": { "kind": "variables_get", "variable": "i" }
        },
        "next": {
          "kind": "text_print",
          "value": {
            "kind": "lists_get_index", "mode": "GET", "where": "FROM_END",
            "list": { "kind": "variables_get", "variable": "xs" },
            "at": { "kind": "math_number", "value": 2 }
          },
          "next": {
            "kind": "text_print",
            "value": {
              "kind": "lists_get_index", "mode": "GET", "where": "FROM_END",
              "list": { "kind": "variables_get", "variable": "xs" },
              "at": { "kind": "variables_get", "variable": "i" }
            },
            "next": {
              "kind": "lists_get_index", "mode": "REMOVE", "where": "FROM_END",
              "list": { "kind": "variables_get", "variable": "xs" },
              "at": { "kind": "variables_get", "variable": "i" },
              "next": {
                "kind": "lists_get_index", "mode": "REMOVE", "where": "FIRST",
                "list": { "kind": "variables_get", "variable": "xs" }
              }
            }
          }
        }
      }
    }
  }]
}"#;

#[test]
fn test_list_access_one_based() {
    insta::assert_snapshot!(render(LIST_ACCESS), @r#"
    $xs;
    $i;


    $xs = array(1, null, 3);
    print($xs[0]);
    print($xs[$i - 1]);
    print(array_slice($xs, -2, 1)[0]);
    print(array_slice($xs, -$i, 1)[0]);
    array_splice($xs, count($xs) - $i, 1)[0];
    array_shift($xs);
    "#);
}

#[test]
fn test_list_access_zero_based() {
    let options = GeneratorOptions::default().with_index_origin(IndexOrigin::Zero);
    let code = render_with(LIST_ACCESS, options).expect("Failed to generate");

    insta::assert_snapshot!(code, @r#"
    $xs;
    $i;


    $xs = array(1, null, 3);
    print($xs[1]);
    print($xs[$i]);
    print(array_slice($xs, -3, 1)[0]);
    print(array_slice($xs, -($i + 1), 1)[0]);
    array_splice($xs, count($xs) - ($i + 1), 1)[0];
    array_shift($xs);
    "#);
}

#[test]
fn test_procedures_helpers_and_loops() {
    let code = render(
        r#"{
          "variables": [
            { "id": "n", "name": "n" },
            { "id": "total", "name": "total" }
          ],
          "blocks": [
            {
              "kind": "procedures_def", "name": "add_up", "params": ["n"],
              "comment": "Accumulates n.",
              "body": {
                "kind": "math_change", "variable": "total",
                "delta": { "kind": "variables_get", "variable": "n" }
              },
              "returns": { "kind": "variables_get", "variable": "total" }
            },
            {
              "kind": "variables_set", "variable": "total",
              "value": { "kind": "math_number", "value": 0 },
              "next": {
                "kind": "controls_repeat_ext",
                "times": {
                  "kind": "math_random_int",
                  "from": { "kind": "math_number", "value": 1 },
                  "to": { "kind": "math_number", "value": 10 }
                },
                "body": {
                  "kind": "text_print",
                  "value": {
                    "kind": "procedures_call_return", "name": "add_up",
                    "args": [{ "kind": "math_number", "value": 2 }]
                  }
                }
              }
            }
          ]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $n;
    $total;

    // Accumulates n.
    function add_up($n) {
      global $total;
      $total += $n;
      return $total;
    }

    function math_random_int($a, $b) {
      if ($a > $b) {
        return rand($b, $a);
      }
      return rand($a, $b);
    }


    $total = 0;
    $repeat_end = math_random_int(1, 10);
    for ($count = 0; $count < $repeat_end; $count++) {
      print(add_up(2));
    }
    "#);
}

#[test]
fn test_early_return_and_statement_call() {
    let code = render(
        r#"{
          "variables": [{ "id": "flag", "name": "flag" }],
          "blocks": [
            {
              "kind": "procedures_def", "name": "check",
              "body": {
                "kind": "procedures_if_return",
                "condition": { "kind": "variables_get", "variable": "flag" }
              }
            },
            { "kind": "procedures_call_no_return", "name": "check" }
          ]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $flag;

    function check() {
      global $flag;
      if ($flag) {
        return;
      }
    }


    check();
    "#);
}

#[test]
fn test_counting_loops() {
    let code = render(
        r#"{
          "variables": [
            { "id": "i", "name": "i" },
            { "id": "hi", "name": "hi" }
          ],
          "blocks": [{
            "kind": "controls_for", "variable": "i",
            "from": { "kind": "math_number", "value": 1 },
            "to": { "kind": "math_number", "value": 10 },
            "by": { "kind": "math_number", "value": 2 },
            "body": { "kind": "text_print", "value": { "kind": "variables_get", "variable": "i" } },
            "next": {
              "kind": "controls_for", "variable": "i",
              "from": { "kind": "math_number", "value": 10 },
              "to": { "kind": "math_number", "value": 1 },
              "by": { "kind": "math_number", "value": 1 },
              "body": { "kind": "text_print", "value": { "kind": "variables_get", "variable": "i" } },
              "next": {
                "kind": "controls_for", "variable": "i",
                "from": { "kind": "math_number", "value": 1 },
                "to": {
                  "kind": "math_arithmetic", "op": "ADD",
                  "a": { "kind": "variables_get", "variable": "hi" },
                  "b": { "kind": "math_number", "value": 1 }
                },
                "body": { "kind": "text_print", "value": { "kind": "variables_get", "variable": "i" } }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $i;
    $hi;


    for ($i = 1; $i <= 10; $i += 2) {
      print($i);
    }
    for ($i = 10; $i >= 1; $i--) {
      print($i);
    }
    $i_end = $hi + 1;
    $i_inc = 1;
    if (1 > $i_end) {
      $i_inc = -$i_inc;
    }
    for ($i = 1; $i_inc >= 0 ? $i <= $i_end : $i >= $i_end; $i += $i_inc) {
      print($i);
    }
    "#);
}

#[test]
fn test_conditionals_and_loop_control() {
    let code = render(
        r#"{
          "variables": [
            { "id": "item", "name": "item" },
            { "id": "items", "name": "items" }
          ],
          "blocks": [{
            "kind": "controls_for_each", "variable": "item",
            "list": { "kind": "variables_get", "variable": "items" },
            "body": {
              "kind": "controls_if",
              "branches": [{
                "condition": {
                  "kind": "logic_negate",
                  "value": { "kind": "variables_get", "variable": "item" }
                },
                "body": { "kind": "controls_flow_statements", "flow": "CONTINUE" }
              }],
              "next": {
                "kind": "text_print",
                "value": { "kind": "variables_get", "variable": "item" }
              }
            },
            "next": {
              "kind": "controls_while_until", "mode": "UNTIL",
              "condition": {
                "kind": "logic_compare", "op": "GTE",
                "a": { "kind": "variables_get", "variable": "item" },
                "b": { "kind": "math_number", "value": 10 }
              },
              "body": {
                "kind": "math_change", "variable": "item",
                "delta": { "kind": "math_number", "value": 1 }
              },
              "next": {
                "kind": "controls_if",
                "branches": [
                  {
                    "condition": {
                      "kind": "logic_compare", "op": "EQ",
                      "a": { "kind": "variables_get", "variable": "item" },
                      "b": { "kind": "math_number", "value": 1 }
                    },
                    "body": { "kind": "text_print", "value": { "kind": "text", "text": "one" } }
                  },
                  {
                    "condition": {
                      "kind": "logic_operation", "op": "AND",
                      "a": {
                        "kind": "logic_compare", "op": "GT",
                        "a": { "kind": "variables_get", "variable": "item" },
                        "b": { "kind": "math_number", "value": 1 }
                      }
                    },
                    "body": { "kind": "text_print", "value": { "kind": "text", "text": "big" } }
                  }
                ],
                "has_else": true,
                "else_body": { "kind": "text_print", "value": { "kind": "text", "text": "small" } }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $item;
    $items;


    foreach ($items as $item) {
      if (!$item) {
        continue;
      }
      print($item);
    }
    while (!($item >= 10)) {
      $item += 1;
    }
    if ($item == 1) {
      print('one');
    } else if ($item > 1 && true) {
      print('big');
    } else {
      print('small');
    }
    "#);
}

#[test]
fn test_text_helpers_are_shared() {
    let code = render(
        r#"{
          "variables": [{ "id": "s", "name": "s" }],
          "blocks": [{
            "kind": "text_print",
            "value": { "kind": "text_join", "items": [] },
            "next": {
              "kind": "text_print",
              "value": {
                "kind": "text_join",
                "items": [
                  { "kind": "text", "text": "a" },
                  { "kind": "variables_get", "variable": "s" }
                ]
              },
              "next": {
                "kind": "text_print",
                "value": {
                  "kind": "text_join",
                  "items": [
                    { "kind": "text", "text": "a" },
                    null,
                    { "kind": "variables_get", "variable": "s" }
                  ]
                },
                "next": {
                  "kind": "text_print",
                  "value": {
                    "kind": "text_length",
                    "value": { "kind": "variables_get", "variable": "s" }
                  },
                  "next": {
                    "kind": "text_print",
                    "value": {
                      "kind": "lists_length",
                      "value": { "kind": "lists_create_empty" }
                    },
                    "next": {
                      "kind": "text_print",
                      "value": {
                        "kind": "text_index_of", "end": "FIRST",
                        "value": { "kind": "variables_get", "variable": "s" },
                        "find": { "kind": "text", "text": "b" }
                      },
                      "next": {
                        "kind": "text_append", "variable": "s",
                        "text": { "kind": "text", "text": "it's" }
                      }
                    }
                  }
                }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $s;

    function length($value) {
      if (is_string($value)) {
        return strlen($value);
      } else {
        return count($value);
      }
    }

    function text_indexOf($text, $search) {
      $pos = strpos($text, $search);
      return $pos === false ? 0 : $pos + 1;
    }


    print('');
    print('a' . $s);
    print(implode('', array('a','',$s)));
    print(length($s));
    print(length(array()));
    print(text_indexOf($s, 'b'));
    $s .= 'it\'s';
    "#);
}

#[test]
fn test_comments_and_disabled_blocks() {
    let code = render(
        r#"{
          "variables": [{ "id": "x", "name": "x" }],
          "blocks": [{
            "kind": "variables_set", "variable": "x",
            "comment": "double it",
            "value": {
              "kind": "math_arithmetic", "op": "MULTIPLY",
              "a": { "kind": "math_number", "value": 2, "comment": "two" },
              "b": { "kind": "variables_get", "variable": "x" }
            },
            "next": {
              "kind": "text_print", "disabled": true,
              "value": { "kind": "text", "text": "skipped" },
              "next": {
                "kind": "text_print",
                "value": { "kind": "variables_get", "variable": "x" }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $x;


    // double it
    // two
    $x = 2 * $x;
    print($x);
    "#);
}

#[test]
fn test_math_expressions() {
    let code = render(
        r#"{
          "variables": [{ "id": "x", "name": "x" }],
          "blocks": [
            {
              "kind": "math_single", "op": "NEG",
              "value": { "kind": "math_number", "value": -3 }
            },
            {
              "kind": "math_single", "op": "SIN",
              "value": { "kind": "variables_get", "variable": "x" }
            },
            {
              "kind": "math_arithmetic", "op": "MULTIPLY",
              "a": { "kind": "math_number", "value": 2 },
              "b": { "kind": "math_constant", "constant": "GOLDEN_RATIO" }
            },
            {
              "kind": "math_constrain",
              "value": { "kind": "variables_get", "variable": "x" }
            },
            {
              "kind": "math_modulo",
              "dividend": { "kind": "variables_get", "variable": "x" },
              "divisor": { "kind": "math_number", "value": 2 }
            },
            {
              "kind": "math_arithmetic", "op": "POWER",
              "a": { "kind": "math_number", "value": 2 },
              "b": { "kind": "math_number", "value": 0.5 }
            },
            { "kind": "math_random_float" }
          ]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $x;


    -(-3);

    sin($x / 180 * pi());

    2 * ((1 + sqrt(5)) / 2);

    min(max($x, 0), INF);

    $x % 2;

    2 ** 0.5;

    (float)rand()/(float)getrandmax();
    "#);
}

#[test]
fn test_character_access() {
    let code = render(
        r#"{
          "variables": [{ "id": "s", "name": "s" }],
          "blocks": [{
            "kind": "text_print",
            "value": {
              "kind": "text_char_at", "where": "FROM_START",
              "value": { "kind": "variables_get", "variable": "s" },
              "at": { "kind": "math_number", "value": 1 }
            },
            "next": {
              "kind": "text_print",
              "value": {
                "kind": "text_char_at", "where": "FROM_END",
                "value": { "kind": "variables_get", "variable": "s" },
                "at": { "kind": "math_number", "value": 1 }
              },
              "next": {
                "kind": "text_print",
                "value": {
                  "kind": "text_char_at", "where": "RANDOM",
                  "value": { "kind": "variables_get", "variable": "s" }
                }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $s;

    function text_random_letter($text) {
      return $text[rand(0, strlen($text) - 1)];
    }


    print(substr($s, 0, 1));
    print(substr($s, -1, 1));
    print(text_random_letter($s));
    "#);
}

#[test]
fn test_reserved_names_are_renamed() {
    let code = render(
        r#"{
          "variables": [{ "id": "v", "name": "print" }],
          "blocks": [{
            "kind": "variables_set", "variable": "v",
            "value": { "kind": "logic_null" }
          }]
        }"#,
    );
    assert_eq!(code, "$print2;\n\n\n$print2 = null;\n");
}

#[test]
fn test_remove_in_value_slot_is_rejected() {
    let err = render_with(
        r#"{
          "blocks": [{
            "kind": "text_print",
            "value": { "kind": "lists_get_index", "id": "take", "mode": "REMOVE", "where": "LAST" }
          }]
        }"#,
        GeneratorOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        GenerateError::ExpectedValue {
            construct: "lists_get_index",
            node: "take".to_string(),
        }
    );
}

#[test]
fn test_if_without_branches_is_unsupported() {
    let err = render_with(
        r#"{ "blocks": [{ "kind": "controls_if", "id": "empty" }] }"#,
        GeneratorOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Unsupported {
            construct: "controls_if",
            ..
        }
    ));
}

#[test]
fn test_same_tier_operands_keep_grouping() {
    let code = render(
        r#"{
          "variables": [
            { "id": "a", "name": "a" },
            { "id": "b", "name": "b" },
            { "id": "c", "name": "c" }
          ],
          "blocks": [{
            "kind": "text_print",
            "value": {
              "kind": "math_arithmetic", "op": "MINUS",
              "a": { "kind": "variables_get", "variable": "a" },
              "b": {
                "kind": "math_arithmetic", "op": "ADD",
                "a": { "kind": "variables_get", "variable": "b" },
                "b": { "kind": "variables_get", "variable": "c" }
              }
            },
            "next": {
              "kind": "text_print",
              "value": {
                "kind": "math_arithmetic", "op": "DIVIDE",
                "a": { "kind": "variables_get", "variable": "a" },
                "b": {
                  "kind": "math_arithmetic", "op": "MULTIPLY",
                  "a": { "kind": "variables_get", "variable": "b" },
                  "b": { "kind": "variables_get", "variable": "c" }
                }
              },
              "next": {
                "kind": "text_print",
                "value": {
                  "kind": "math_arithmetic", "op": "ADD",
                  "a": { "kind": "variables_get", "variable": "a" },
                  "b": {
                    "kind": "math_arithmetic", "op": "MINUS",
                    "a": { "kind": "variables_get", "variable": "b" },
                    "b": { "kind": "variables_get", "variable": "c" }
                  }
                }
              }
            }
          }]
        }"#,
    );

    insta::assert_snapshot!(code, @r#"
    $a;
    $b;
    $c;


    print($a - ($b + $c));
    print($a / ($b * $c));
    print($a + ($b - $c));
    "#);
}

const LIST_WRITES: &str = r#"{
  "variables": [
    { "id": "xs", "name": "xs" },
    { "id": "i", "name": "i" },
    { "id": "v", "name": "v" }
  ],
  "blocks": [{
    "kind": "lists_set_index", "mode": "SET", "where": "FIRST",
    "list": { "kind": "variables_get", "variable": "xs" },
    "to": { "kind": "variables_get", "variable": "v" },
    "next": {
      "kind": "lists_set_index", "mode": "INSERT", "where": "LAST",
      "list": { "kind": "variables_get", "variable": "xs" },
      "to": { "kind": "variables_get", "variable": "v" },
      "next": {
        "kind": "lists_set_index", "mode": "SET", "where": "FROM_START",
        "list": { "kind": "variables_get", "variable": "xs" },
        "at": { "kind": "variables_get", "variable": "i" },
        "to": { "kind": "variables_get", "variable": "v" },
        "next": {
          "kind": "lists_set_index", "mode": "INSERT", "where": "FROM_START",
          "list": { "kind": "variables_get", "variable": "xs" },
          "at": { "kind": "math_number", "value": 2 },
          "to": { "kind": "variables_get", "variable": "v" },
          "next": {
            "kind": "lists_set_index", "mode": "SET", "where": "FROM_END",
            "list": { "kind": "variables_get", "variable": "xs" },
            "at": { "kind": "variables_get", "variable": "i" },
            "to": { "kind": "variables_get", "variable": "v" },
            "next": {
              "kind": "lists_set_index", "mode": "INSERT", "where": "RANDOM",
              "list": {
                "kind": "lists_get_index", "mode": "GET", "where": "FIRST",
                "list": { "kind": "variables_get", "variable": "xs" }
              },
              "to": { "kind": "variables_get", "variable": "v" }
            }
          }
        }
      }
    }
  }]
}"#;

#[test]
fn test_list_writes_one_based() {
    insta::assert_snapshot!(render(LIST_WRITES), @r#"
    $xs;
    $i;
    $v;

    function lists_set_from_end(&$list, $at, $value) {
      $list[count($list) - $at] = $value;
    }


    $xs[0] = $v;
    array_push($xs, $v);
    $xs[$i - 1] = $v;
    array_splice($xs, 1, 0, $v);
    lists_set_from_end($xs, $i, $v);
    $tmp_list = &$xs[0];
    $tmp_x = rand(0, count($tmp_list)-1);
    array_splice($tmp_list, $tmp_x, 0, $v);
    "#);
}

#[test]
fn test_list_writes_zero_based() {
    let options = GeneratorOptions::default().with_index_origin(IndexOrigin::Zero);
    let code = render_with(LIST_WRITES, options).expect("Failed to generate");
    let (_, body) = code.split_once("\n\n\n").expect("Missing preamble");

    insta::assert_snapshot!(body, @r#"
    $xs[0] = $v;
    array_push($xs, $v);
    $xs[$i] = $v;
    array_splice($xs, 2, 0, $v);
    lists_set_from_end($xs, $i + 1, $v);
    $tmp_list = &$xs[0];
    $tmp_x = rand(0, count($tmp_list)-1);
    array_splice($tmp_list, $tmp_x, 0, $v);
    "#);
}

const RANGES: &str = r#"{
  "variables": [
    { "id": "xs", "name": "xs" },
    { "id": "i", "name": "i" },
    { "id": "j", "name": "j" },
    { "id": "s", "name": "s" }
  ],
  "blocks": [{
    "kind": "text_print",
    "value": {
      "kind": "lists_get_sublist", "where1": "FROM_START", "where2": "FROM_START",
      "list": { "kind": "variables_get", "variable": "xs" },
      "at1": { "kind": "math_number", "value": 2 },
      "at2": { "kind": "variables_get", "variable": "j" }
    },
    "next": {
      "kind": "text_print",
      "value": {
        "kind": "lists_get_sublist", "where1": "FROM_END", "where2": "LAST",
        "list": { "kind": "variables_get", "variable": "xs" },
        "at1": { "kind": "variables_get", "variable": "i" }
      },
      "next": {
        "kind": "text_print",
        "value": {
          "kind": "lists_get_sublist", "where1": "FIRST", "where2": "FROM_END",
          "list": { "kind": "lists_create_empty" },
          "at2": { "kind": "math_number", "value": 1 }
        },
        "next": {
          "kind": "text_print",
          "value": {
            "kind": "lists_get_sublist", "where1": "FIRST", "where2": "LAST",
            "list": { "kind": "variables_get", "variable": "xs" }
          },
          "next": {
            "kind": "text_print",
            "value": {
              "kind": "text_get_substring", "where1": "FROM_START", "where2": "FROM_END",
              "value": { "kind": "variables_get", "variable": "s" },
              "at1": { "kind": "variables_get", "variable": "i" },
              "at2": { "kind": "math_number", "value": 2 }
            },
            "next": {
              "kind": "text_print",
              "value": {
                "kind": "text_get_substring", "where1": "FIRST", "where2": "LAST",
                "value": { "kind": "variables_get", "variable": "s" }
              }
            }
          }
        }
      }
    }
  }]
}"#;

#[test]
fn test_ranges_one_based() {
    insta::assert_snapshot!(render(RANGES), @r#"
    $xs;
    $i;
    $j;
    $s;

    function lists_get_sublist($list, $where1, $at1, $where2, $at2) {
      if ($where1 == 'FROM_END') {
        $at1 = count($list) - 1 - $at1;
      } else if ($where1 == 'FIRST') {
        $at1 = 0;
      } else if ($where1 != 'FROM_START') {
        throw new Exception('Unhandled option (lists_get_sublist).');
      }
      $length = 0;
      if ($where2 == 'FROM_START') {
        $length = $at2 - $at1 + 1;
      } else if ($where2 == 'FROM_END') {
        $length = count($list) - $at1 - $at2;
      } else if ($where2 == 'LAST') {
        $length = count($list) - $at1;
      } else {
        throw new Exception('Unhandled option (lists_get_sublist).');
      }
      return array_slice($list, $at1, $length);
    }

    function text_get_substring($text, $where1, $at1, $where2, $at2) {
      if ($where1 == 'FROM_END') {
        $at1 = strlen($text) - 1 - $at1;
      } else if ($where1 == 'FIRST') {
        $at1 = 0;
      } else if ($where1 != 'FROM_START') {
        throw new Exception('Unhandled option (text_get_substring).');
      }
      $length = 0;
      if ($where2 == 'FROM_START') {
        $length = $at2 - $at1 + 1;
      } else if ($where2 == 'FROM_END') {
        $length = strlen($text) - $at1 - $at2;
      } else if ($where2 == 'LAST') {
        $length = strlen($text) - $at1;
      } else {
        throw new Exception('Unhandled option (text_get_substring).');
      }
      return substr($text, $at1, $length);
    }


    print(array_slice($xs, 1, ($j - 1) - 1 + 1));
    print(array_slice($xs, count($xs) - $i, count($xs) - (count($xs) - $i)));
    print(lists_get_sublist(array(), 'FIRST', 0, 'FROM_END', 0));
    print($xs);
    print(text_get_substring($s, 'FROM_START', $i - 1, 'FROM_END', 1));
    print($s);
    "#);
}

#[test]
fn test_ranges_zero_based() {
    let options = GeneratorOptions::default().with_index_origin(IndexOrigin::Zero);
    let code = render_with(RANGES, options).expect("Failed to generate");
    let (_, body) = code.split_once("\n\n\n").expect("Missing preamble");

    insta::assert_snapshot!(body, @r#"
    print(array_slice($xs, 2, $j - 2 + 1));
    print(array_slice($xs, count($xs) - ($i + 1), count($xs) - (count($xs) - ($i + 1))));
    print(lists_get_sublist(array(), 'FIRST', 0, 'FROM_END', 1));
    print($xs);
    print(text_get_substring($s, 'FROM_START', $i, 'FROM_END', 2));
    print($s);
    "#);
}

#[test]
fn test_range_ending_at_first_is_unsupported() {
    let err = render_with(
        r#"{ "blocks": [{ "kind": "lists_get_sublist", "id": "cut", "where2": "FIRST" }] }"#,
        GeneratorOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported lists_get_sublist (node 'cut'): range from FROM_START to FIRST"
    );
}
