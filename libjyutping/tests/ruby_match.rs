//! Ruby alignment with the built-in charlist, a small hand-made lexicon and
//! no lexicon at all.
use libjyutping::ruby::{align, align_plain, default_matcher, max_align_length, RubyMatcher};
use libjyutping::{CharLexicon, RubyError};

const READINGS: &str = "\
    呢 ni1 ne1; 度 dou6 dok6; 嘅 ge3; 食 sik6 zi6; 物 mat6; 質 zat1 zi3;\
    素 sou3; 返 faan1; 咁 gam3 gam2; 上 soeng6 soeng5; 下 haa6 haa5; 一 jat1;\
    二 ji6; 三 saam1; 四 sei3; 九 gau2; 唔 m4; 搭 daap3;\
    八 baat3; 井 zeng2 zing2; 丁 ding1 zaang1; 死 sei2; 咗 zo2; 點 dim2;\
    算 syun3; 好 hou2 hou3; 個 go3; 我 ngo5; 部 bou6; 你 nei5;\
    嗎 maa3 maa1; 條 tiu4; 快 faai3; 啲 di1; 嚟 lei4; 微 mei4;\
    米 mai5; 係 hai6; 分 fan1 fan6; 之 zi1; 同 tung4; 間 gaan1 gaan3;\
    搜 sau2; 傻 so4; 仔 zai2; 懵 mung2; 盛 sing6 sing4; 哈 haa1;\
    做 zou6; 有 jau5; 班 baan1; 怪 gwaai3; 叔 suk1; 睺 hau1;\
    緊 gan2; 正 zing3 zeng3; 太 taai3; 呀 aa3; 見 gin3; 堆 deoi1;\
    劉 lau4; 博 bok3; 士 si6";

fn lexicon() -> CharLexicon {
    let mut lex = CharLexicon::new();
    for entry in READINGS.split(';') {
        let mut fields = entry.split_whitespace();
        let ch = fields.next().and_then(|s| s.chars().next()).unwrap();
        for reading in fields {
            lex.insert(ch, reading, 1);
        }
    }
    lex
}

/// (text, pronunciation, expected) with the lexicon.
const WITH_LEXICON: &[(&str, &str, &str)] = &[
    ("呢度嘅食物質素返咁上下", "ni1 dou1 ge3 sik6 zat1 sou3 dou1 jau5 faan1 gam3 soeng6 haa2", "呢ni1 度dou1 嘅ge3 食sik6 物 質zat1 素sou3dou1jau5 返faan1 咁gam3 上soeng6 下haa2"),
    ("一二三四。", "jat1 ji6 saam1 sei3", "一jat1 二ji6 三saam1 四sei3 。"),
    ("一二三四。", "jat1 ji6 saam1 sei3 aa1 aa1", "一jat1 二ji6 三saam1 四sei3aa1aa1 。"),
    ("九唔搭八。", "jat1 ji6 saam1 sei3", "九jat1 唔ji6 搭saam1 八sei3 。"),
    ("九唔搭八。", "jat1 gau2 ji6 saam1 sei3 m4", "九jat1gau2ji6saam1sei3 唔m4 搭 八 。"),
    ("九唔搭八。", "jat1 gau2 ji6 saam1 sei3 daap3", "九jat1gau2ji6saam1 唔sei3 搭daap3 八 。"),
    ("ＳＥＲＶＥＲ。", "soe1 faa2", "ＳＥＲＶＥＲsoe1faa2 。"),
    ("ＳＥＲＶＥＲ死。", "soe1 faa2 sei2", "ＳＥＲＶＥＲsoe1faa2 死sei2 。"),
    ("Hi，你好嗎？", "haai1 nei5 hou2 maa3", "Hihaai1 ， 你nei5 好hou2 嗎maa3 ？"),
    ("Hi Hi，你好嗎？", "haai1 haai1 nei5 hou2 maa3", "Hi Hihaai1haai1 ， 你nei5 好hou2 嗎maa3 ？"),
    ("你條 hi hi 好快啲返嚟！", "nei5 tiu4 haai1 haai1 hou2 faai3 di1 faan1 lei4", "你nei5 條tiu4   hi hihaai1haai1   好hou2 快faai3 啲di1 返faan1 嚟lei4 ！"),
    ("個 server 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   serversoe1faa2   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個 ｓｅｒｖｅｒ 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   ｓｅｒｖｅｒsoe1faa2   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個 「ｓｅｒｖｅｒ」 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   「 ｓｅｒｖｅｒsoe1faa2 」   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個 「『ｓｅｒｖｅｒ』」 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   「 『 ｓｅｒｖｅｒsoe1faa2 』 」   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("「『ｓｅｒｖｅｒ』」 死咗，點算好？", "soe1 faa2 sei2 zo2 dim2 syun3 hou2", "「 『 ｓｅｒｖｅｒsoe1faa2 』 」   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個ＳＥＲＶＥＲ死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3 ＳＥＲＶＥＲsoe1faa2 死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("我 hi five 你！", "ngo5 haai1 fai1 nei5", "我ngo5   hi fivehaai1fai1   你nei5 ！"),
    ("我 hi asdf five 你！", "ngo5 haai1 ei1 e1 di1 e1 fai1 nei5", "我ngo5   hi asdf fivehaai1ei1e1di1e1fai1   你nei5 ！"),
    ("一二唔見咗一堆三四。", "jat1 ji6 saam1 sei3", "一jat1 二ji6 唔 見 咗 一 堆 三saam1 四sei3 。"),
    ("「ｓｅｒｖｅｒ」死咗", "soe1 faa2 sei2 zo2", "「 ｓｅｒｖｅｒsoe1faa2 」 死sei2 咗zo2"),
    ("「server」同「server」之間！", "soe1 faa2 tung4 soe1 faa2 zi1 gaan1", "「 serversoe1faa2 」 同tung4 「 serversoe1faa2 」 之zi1 間gaan1 ！"),
    ("「server」同「server」！", "soe1 faa2 tung4 soe1 faa2", "「 serversoe1faa2 」 同tung4 「 serversoe1faa2 」 ！"),
    ("hi 搜 hi！", "haai1 sau1 sau2 sau3 sau4 sau5 sau6 haai1", "hihaai1sau1   搜sau2   hisau3sau4sau5sau6haai1 ！"),
    ("九唔搭八。", "jat1 ji6 saam1 sei3 aa1 aa1", "九jat1ji6saam1 唔sei3 搭aa1 八aa1 。"),
    ("九唔搭八。", "jat1 gau2 ji6 saam1 sei3", "九jat1gau2 唔ji6 搭saam1 八sei3 。"),
    ("九唔搭八。", "jat1 ji6 saam1 sei3 gau2", "九jat1ji6saam1sei3gau2 唔 搭 八 。"),
    ("九唔搭八九。", "jat1 ji6 saam1 sei3 gau2", "九jat1 唔ji6 搭saam1 八sei3 九gau2 。"),
    ("九唔搭八。", "jat1 daap1 baat3 saam1 sei3 gau2", "九 唔jat1 搭daap1 八baat3saam1sei3gau2 。"),
    ("我部XYZ死咗。", "ngo5 bou6 sei2 zo2", "我ngo5 部bou6 XYZ 死sei2 咗zo2 。"),
    ("1微米係1000000分之1米。", "jat1 mei4 mai5 hai6 jat1 baak3 maan6 fan6 zi1 jat1 mai5.", "1jat1 微mei4 米mai5 係hai6 1000000jat1baak3maan6 分fan6 之zi1 1jat1 米mai5 。"),
    ("1微米係１００００００分之1米。", "jat1 mei4 mai5 hai6 jat1 baak3 maan6 fan6 zi1 jat1 mai5.", "1jat1 微mei4 米mai5 係hai6 １００００００jat1baak3maan6 分fan6 之zi1 1jat1 米mai5 。"),
    ("呢度嘅#食物 質素返咁上下", "ni1 dou1 ge3 sik6 zat1 sou3 dou1 jau5 faan1 gam3 soeng6 haa2", "呢ni1 度dou1 嘅ge3 #食物sik6   質zat1 素sou3dou1jau5 返faan1 咁gam3 上soeng6 下haa2"),
    ("傻仔 #懵盛盛#condom#哈#condom#哈#哈 做#condom。", "so4 zai2 mung2 sing6 sing6 kon1 dam4 haa1 kon1 dam4 haa1 haa1 zou6 kon1 dam4", "傻so4 仔zai2   #懵盛盛mung2sing6sing6kon1 #condomdam4 #哈haa1 #condomkon1dam4 #哈haa1 #哈haa1   做zou6 #condomkon1dam4 。"),
    ("#。", "zeng2", "#zeng2 。"),
    ("井#。", "zeng2", "井zeng2 # 。"),
    ("丁#井。", "zeng2", "丁 #井zeng2 。"),
    ("井#丁", "zeng2", "井zeng2 #丁"),
    ("X丫X丫X丫X丫X丫", "tik1 waai1 tik1 waai1 tik1 waai1 tik1 waai1 tik1 waai1", "Xtik1 丫waai1 Xtik1 丫waai1 Xtik1 丫waai1 Xtik1 丫waai1 Xtik1 丫waai1"),
    ("", "", ""),
    ("x", "", "x"),
    ("#x", "", "#x"),
    ("#卜 #正 #卜 #正", "haa1 lou2 haa1 lou2", "#卜haa1   #正lou2   #卜haa1   #正lou2"),
    ("有班#怪叔叔 睺緊個正太", "jau5 baan1 gwaai3 suk1 suk1 hau1 gan2 go3 zing3 taai3", "有jau5 班baan1 #怪叔叔gwaai3suk1suk1   睺hau1 緊gan2 個go3 正zing3 太taai3"),
    ("有#怪叔叔 呀", "jau5 gwaai3 suk1 suk1 aa3", "有jau5 #怪叔叔gwaai3suk1suk1   呀aa3"),
    ("嘅#食物 質", "ge3 sik6 zat1", "嘅ge3 #食物sik6   質zat1"),
    ("一個二個", "gau2 m4 daap3 baat3", "一gau2 個m4 二daap3 個baat3"),
    ("劉博", "puk1 zaak6", "劉puk1 博zaak6"),
    ("劉博士", "puk1 bok3 si6", "劉puk1 博bok3 士si6"),
    ("劉博士劉博士劉博士劉博士", "puk1 bok3 si6 puk1 bok3 si6 puk1 bok3 si6 puk1 bok3 si6", "劉puk1 博bok3 士si6 劉puk1 博bok3 士si6 劉puk1 博bok3 士si6 劉puk1 博bok3 士si6"),
    ("#配圖", "pui3 tou4", "#配圖pui3tou4"),
    ("#J圖", "zei1 tou4", "#J圖zei1tou4"),
    ("#JJ圖", "zei1 zei1 tou4", "#JJ圖zei1zei1tou4"),
    ("#JJ 圖", "zei1 zei1 tou4", "#JJzei1zei1   圖tou4"),
];

/// Cases where position alone gives the same answer.
const WITHOUT_LEXICON: &[(&str, &str, &str)] = &[
    ("一二三四。", "jat1 ji6 saam1 sei3", "一jat1 二ji6 三saam1 四sei3 。"),
    ("九唔搭八。", "jat1 ji6 saam1 sei3", "九jat1 唔ji6 搭saam1 八sei3 。"),
    ("ＳＥＲＶＥＲ。", "soe1 faa2", "ＳＥＲＶＥＲsoe1faa2 。"),
    ("ＳＥＲＶＥＲ死。", "soe1 faa2 sei2", "ＳＥＲＶＥＲsoe1faa2 死sei2 。"),
    ("Hi，你好嗎？", "haai1 nei5 hou2 maa3", "Hihaai1 ， 你nei5 好hou2 嗎maa3 ？"),
    ("Hi Hi，你好嗎？", "haai1 haai1 nei5 hou2 maa3", "Hi Hihaai1haai1 ， 你nei5 好hou2 嗎maa3 ？"),
    ("你條 hi hi 好快啲返嚟！", "nei5 tiu4 haai1 haai1 hou2 faai3 di1 faan1 lei4", "你nei5 條tiu4   hi hihaai1haai1   好hou2 快faai3 啲di1 返faan1 嚟lei4 ！"),
    ("個 server 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   serversoe1faa2   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個 ｓｅｒｖｅｒ 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   ｓｅｒｖｅｒsoe1faa2   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個 「ｓｅｒｖｅｒ」 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   「 ｓｅｒｖｅｒsoe1faa2 」   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個 「『ｓｅｒｖｅｒ』」 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3   「 『 ｓｅｒｖｅｒsoe1faa2 』 」   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("「『ｓｅｒｖｅｒ』」 死咗，點算好？", "soe1 faa2 sei2 zo2 dim2 syun3 hou2", "「 『 ｓｅｒｖｅｒsoe1faa2 』 」   死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("個ＳＥＲＶＥＲ死咗，點算好？", "go3 soe1 faa2 sei2 zo2 dim2 syun3 hou2", "個go3 ＳＥＲＶＥＲsoe1faa2 死sei2 咗zo2 ， 點dim2 算syun3 好hou2 ？"),
    ("我 hi five 你！", "ngo5 haai1 fai1 nei5", "我ngo5   hi fivehaai1fai1   你nei5 ！"),
    ("我 hi asdf five 你！", "ngo5 haai1 ei1 e1 di1 e1 fai1 nei5", "我ngo5   hi asdf fivehaai1ei1e1di1e1fai1   你nei5 ！"),
    ("「ｓｅｒｖｅｒ」死咗", "soe1 faa2 sei2 zo2", "「 ｓｅｒｖｅｒsoe1faa2 」 死sei2 咗zo2"),
    ("九唔搭八。", "jat1 ji6 saam1 sei3 aa1 aa1", "九jat1ji6saam1 唔sei3 搭aa1 八aa1 。"),
    ("九唔搭八。", "jat1 gau2 ji6 saam1 sei3", "九jat1gau2 唔ji6 搭saam1 八sei3 。"),
    ("九唔搭八九。", "jat1 ji6 saam1 sei3 gau2", "九jat1 唔ji6 搭saam1 八sei3 九gau2 。"),
    ("#。", "zeng2", "#zeng2 。"),
    ("丁#井。", "zeng2", "丁 #井zeng2 。"),
    ("X丫X丫X丫X丫X丫", "tik1 waai1 tik1 waai1 tik1 waai1 tik1 waai1 tik1 waai1", "Xtik1 丫waai1 Xtik1 丫waai1 Xtik1 丫waai1 Xtik1 丫waai1 Xtik1 丫waai1"),
    ("", "", ""),
    ("x", "", "x"),
    ("#x", "", "#x"),
    ("#卜 #正 #卜 #正", "haa1 lou2 haa1 lou2", "#卜haa1   #正lou2   #卜haa1   #正lou2"),
    ("有班#怪叔叔 睺緊個正太", "jau5 baan1 gwaai3 suk1 suk1 hau1 gan2 go3 zing3 taai3", "有jau5 班baan1 #怪叔叔gwaai3suk1suk1   睺hau1 緊gan2 個go3 正zing3 太taai3"),
    ("有#怪叔叔 呀", "jau5 gwaai3 suk1 suk1 aa3", "有jau5 #怪叔叔gwaai3suk1suk1   呀aa3"),
    ("嘅#食物 質", "ge3 sik6 zat1", "嘅ge3 #食物sik6   質zat1"),
    ("一個二個", "gau2 m4 daap3 baat3", "一gau2 個m4 二daap3 個baat3"),
    ("劉博", "puk1 zaak6", "劉puk1 博zaak6"),
    ("劉博士", "puk1 bok3 si6", "劉puk1 博bok3 士si6"),
    ("劉博士劉博士劉博士劉博士", "puk1 bok3 si6 puk1 bok3 si6 puk1 bok3 si6 puk1 bok3 si6", "劉puk1 博bok3 士si6 劉puk1 博bok3 士si6 劉puk1 博bok3 士si6 劉puk1 博bok3 士si6"),
    ("#配圖", "pui3 tou4", "#配圖pui3tou4"),
    ("#J圖", "zei1 tou4", "#J圖zei1tou4"),
    ("#JJ圖", "zei1 zei1 tou4", "#JJ圖zei1zei1tou4"),
    ("#JJ 圖", "zei1 zei1 tou4", "#JJzei1zei1   圖tou4"),
];

/// Surplus and deficit cases where the lexicon changes the answer. Without
/// it surplus tokens pile onto the first slot and bare slots come first.
const WITHOUT_LEXICON_FRONT_EDGE: &[(&str, &str, &str)] = &[
    ("呢度嘅食物質素返咁上下", "ni1 dou1 ge3 sik6 zat1 sou3 dou1 jau5 faan1 gam3 soeng6 haa2", "呢ni1dou1 度ge3 嘅sik6 食zat1 物sou3 質dou1 素jau5 返faan1 咁gam3 上soeng6 下haa2"),
    ("一二三四。", "jat1 ji6 saam1 sei3 aa1 aa1", "一jat1ji6saam1 二sei3 三aa1 四aa1 。"),
    ("九唔搭八。", "jat1 gau2 ji6 saam1 sei3 m4", "九jat1gau2ji6 唔saam1 搭sei3 八m4 。"),
    ("九唔搭八。", "jat1 gau2 ji6 saam1 sei3 daap3", "九jat1gau2ji6 唔saam1 搭sei3 八daap3 。"),
    ("一二唔見咗一堆三四。", "jat1 ji6 saam1 sei3", "一 二 唔 見 咗 一jat1 堆ji6 三saam1 四sei3 。"),
    ("「server」同「server」之間！", "soe1 faa2 tung4 soe1 faa2 zi1 gaan1", "「 serversoe1faa2tung4 」 同soe1 「 serverfaa2 」 之zi1 間gaan1 ！"),
    ("「server」同「server」！", "soe1 faa2 tung4 soe1 faa2", "「 serversoe1faa2tung4 」 同soe1 「 serverfaa2 」 ！"),
    ("hi 搜 hi！", "haai1 sau1 sau2 sau3 sau4 sau5 sau6 haai1", "hihaai1sau1sau2sau3sau4sau5   搜sau6   hihaai1 ！"),
    ("九唔搭八。", "jat1 ji6 saam1 sei3 gau2", "九jat1ji6 唔saam1 搭sei3 八gau2 。"),
    ("九唔搭八。", "jat1 daap1 baat3 saam1 sei3 gau2", "九jat1daap1baat3 唔saam1 搭sei3 八gau2 。"),
    ("我部XYZ死咗。", "ngo5 bou6 sei2 zo2", "我 部ngo5 XYZbou6 死sei2 咗zo2 。"),
    ("1微米係1000000分之1米。", "jat1 mei4 mai5 hai6 jat1 baak3 maan6 fan6 zi1 jat1 mai5.", "1jat1mei4mai5 微hai6 米jat1 係baak3 1000000maan6 分fan6 之zi1 1jat1 米mai5 。"),
    ("1微米係１００００００分之1米。", "jat1 mei4 mai5 hai6 jat1 baak3 maan6 fan6 zi1 jat1 mai5.", "1jat1mei4mai5 微hai6 米jat1 係baak3 １００００００maan6 分fan6 之zi1 1jat1 米mai5 。"),
    ("呢度嘅#食物 質素返咁上下", "ni1 dou1 ge3 sik6 zat1 sou3 dou1 jau5 faan1 gam3 soeng6 haa2", "呢ni1 度dou1 嘅ge3 #食物sik6zat1sou3   質dou1 素jau5 返faan1 咁gam3 上soeng6 下haa2"),
    ("傻仔 #懵盛盛#condom#哈#condom#哈#哈 做#condom。", "so4 zai2 mung2 sing6 sing6 kon1 dam4 haa1 kon1 dam4 haa1 haa1 zou6 kon1 dam4", "傻so4 仔zai2   #懵盛盛mung2sing6sing6kon1dam4haa1 #condomkon1 #哈dam4 #condomhaa1 #哈haa1 #哈zou6   做kon1 #condomdam4 。"),
    ("井#。", "zeng2", "井 #zeng2 。"),
    ("井#丁", "zeng2", "井 #丁zeng2"),
];

#[test]
fn test_lexicon_alignment() {
    let matcher = RubyMatcher::with_lexicon(lexicon());
    for (text, pron, expected) in WITH_LEXICON {
        let got = matcher.align(text, pron).unwrap().annotated;
        assert_eq!(&got, expected, "text {:?} pronunciation {:?}", text, pron);
    }
}

#[test]
fn test_default_alignment_uses_builtin_charlist() {
    for (text, pron, expected) in WITH_LEXICON {
        let got = align_plain(text, pron).unwrap();
        assert_eq!(&got, expected, "text {:?} pronunciation {:?}", text, pron);
    }
}

#[test]
fn test_hash_group_flanking() {
    let out = align_plain(
        "呢度嘅#食物 質素返咁上下",
        "ni1 dou1 ge3 sik6 zat1 sou3 dou1 jau5 faan1 gam3 soeng6 haa2",
    )
    .unwrap();
    assert_eq!(
        out,
        "呢ni1 度dou1 嘅ge3 #食物sik6   質zat1 素sou3dou1jau5 返faan1 咁gam3 上soeng6 下haa2"
    );
}

#[test]
fn test_positional_alignment() {
    let matcher = RubyMatcher::new();
    for (text, pron, expected) in WITHOUT_LEXICON.iter().chain(WITHOUT_LEXICON_FRONT_EDGE) {
        let got = matcher.align(text, pron).unwrap().annotated;
        assert_eq!(&got, expected, "text {:?} pronunciation {:?}", text, pron);
    }
}

#[test]
fn test_long_inputs_at_the_limit() {
    let n = max_align_length();
    assert_eq!(n, 300);
    let matcher = RubyMatcher::with_lexicon(lexicon());

    let text = "一 hi 搜 hi 一！".repeat(n / 10);
    let pron = "jat1 haai1 sau1 sau2 sau3 sau4 sau5 sau6 haai1 jat1 ".repeat(n / 10);
    let expected = "一jat1   hihaai1sau1   搜sau2   hisau3sau4sau5sau6haai1   一jat1 ！ ".repeat(n / 10);
    assert_eq!(matcher.align(&text, &pron).unwrap().annotated, expected.trim());

    let text = "一".repeat(n);
    let pron = vec!["jat1"; n].join(" ");
    let expected = vec!["一jat1"; n].join(" ");
    assert_eq!(matcher.align(&text, &pron).unwrap().annotated, expected);
    assert_eq!(align_plain(&text, &pron).unwrap(), expected);

    let text = "一".repeat(n - 1);
    let mut expected = vec!["一jat1jat1"];
    expected.extend(vec!["一jat1"; n - 2]);
    assert_eq!(matcher.align(&text, &pron).unwrap().annotated, expected.join(" "));

    let text = "一".repeat(n - 1) + "。";
    let pron = vec!["jat1"; n - 2].join(" ");
    let expected = format!("一 {} 。", vec!["一jat1"; n - 2].join(" "));
    let a = matcher.align(&text, &pron).unwrap();
    assert_eq!(a.annotated, expected);
    assert_eq!(a.unmatched_slots, 1, "front deficit leaves the first slot bare");
    assert_eq!(align_plain(&text, &pron).unwrap(), expected);
}

#[test]
fn test_over_the_limit_is_rejected() {
    let n = max_align_length();
    let text = "一".repeat(n + 1);
    assert_eq!(
        align(&text, ""),
        Err(RubyError::LengthExceeded {
            slots: n + 1,
            tokens: 0,
            limit: n
        })
    );
    let pron = vec!["jat1"; n + 1].join(" ");
    assert!(matches!(
        align("一", &pron),
        Err(RubyError::LengthExceeded { .. })
    ));
}

#[test]
fn test_edge_conditions() {
    let cases = [
        ("。", "jat1", "。", 1, 0),
        ("「server」", "a b c", "「 serverabc 」", 0, 0),
        ("「一」二", "a b c", "「 一ab 」 二c", 0, 0),
        ("一\u{3000}二\n三", "a b c", "一a \u{3000} 二b \n 三c", 0, 0),
        ("一二三", "", "一 二 三", 0, 3),
        ("hi, there 一", "haai1 ze1 jat1", "hi, therehaai1ze1   一jat1", 0, 0),
        ("x", "", "x", 0, 1),
        ("", "", "", 0, 0),
    ];
    for (text, pron, expected, unmatched_tokens, unmatched_slots) in cases {
        let a = align(text, pron).unwrap();
        assert_eq!(a.annotated, expected, "text {:?}", text);
        assert_eq!(a.unmatched_tokens, unmatched_tokens, "unmatched tokens for {:?}", text);
        assert_eq!(a.unmatched_slots, unmatched_slots, "unmatched slots for {:?}", text);
    }

    assert!(matches!(align("", "jat1 ji6"), Err(RubyError::InvalidArgument { .. })));
}

#[test]
fn test_tokens_are_conserved() {
    let matcher = RubyMatcher::with_lexicon(lexicon());
    for (text, pron, _) in WITH_LEXICON {
        let m = matcher.run(text, pron).unwrap();
        let placed: usize = m.annotated().iter().map(|a| a.tokens.len()).sum();
        assert_eq!(placed + m.unmatched_tokens(), m.tokens().len(), "{:?}", text);
        for a in m.annotated() {
            if !a.slot.is_alignable() {
                assert!(a.tokens.is_empty(), "pass-through {:?} got tokens", a.slot.text);
            }
        }
        let flat: Vec<&str> = m
            .annotated()
            .iter()
            .flat_map(|a| a.tokens.iter().copied())
            .collect();
        assert_eq!(flat, m.tokens(), "token order must be kept for {:?}", text);
    }
}

#[test]
fn test_every_whitespace_token_is_accounted_for() {
    let cases = [
        ("一二", "jat1 - ji6"),
        ("一二三", "jat1 。 saam1"),
        ("九唔搭八。", "- jat1 ji6 saam1 sei3 ..."),
        ("個 server 死咗，點算好？", "go3 soe1 faa2 sei2 zo2 ， dim2 syun3 hou2 ？"),
        ("。！", "jat1 ！"),
        ("", "。 -"),
    ];
    for (text, pron) in cases {
        let m = default_matcher().run(text, pron).unwrap();
        let words = pron.split_whitespace().count();
        assert_eq!(m.tokens().len(), words, "{:?}", pron);
        let placed: usize = m.annotated().iter().map(|a| a.tokens.len()).sum();
        assert_eq!(placed + m.unmatched_tokens(), words, "{:?} / {:?}", text, pron);

        let rendered = m.plain_text();
        let mut rest = rendered.as_str();
        for a in m.annotated() {
            for t in &a.tokens {
                let at = rest.find(t).unwrap_or_else(|| panic!("{:?} missing from {:?}", t, rendered));
                rest = &rest[at + t.len()..];
            }
        }
    }
}

#[test]
fn test_zipped_and_html_with_lexicon() {
    let matcher = RubyMatcher::with_lexicon(lexicon());
    let m = matcher.run("個 server 死咗", "go3 soe1 faa2 sei2 zo2").unwrap();
    let zipped = m.zipped();
    let expected: Vec<(String, String)> = [
        ("個", "go3"),
        ("server", "soe1 faa2"),
        ("死", "sei2"),
        ("咗", "zo2"),
    ]
    .iter()
    .map(|(a, b)| (a.to_string(), b.to_string()))
    .collect();
    assert_eq!(zipped, expected);
    assert_eq!(
        m.html(),
        "<ruby><rb>個</rb><rt>go3</rt><rb>server</rb><rt>soe1 faa2</rt><rb>死</rb><rt>sei2</rt><rb>咗</rb><rt>zo2</rt></ruby>"
    );
}
